use crate::domain::Password;
use crate::service::tests::utils::{email, fixture, guest, manager};
use crate::service::{AuthService, PersonService};

#[test]
fn test_authenticate_manager() {
    let f = fixture();
    f.people.create_manager(manager("admin@hotel.com", "A1!b#")).unwrap();

    assert!(f.auth.authenticate(&email("admin@hotel.com"), &Password::new("A1!b#").unwrap()));
    assert!(f.auth.authenticate(&email("ADMIN@hotel.com"), &Password::new("A1!b#").unwrap()));
}

#[test]
fn test_wrong_password() {
    let f = fixture();
    f.people.create_manager(manager("admin@hotel.com", "A1!b#")).unwrap();

    assert!(!f.auth.authenticate(&email("admin@hotel.com"), &Password::new("B2!c#").unwrap()));
}

#[test]
fn test_unknown_email() {
    let f = fixture();
    assert!(!f.auth.authenticate(&email("nobody@hotel.com"), &Password::new("A1!b#").unwrap()));
}

#[test]
fn test_guests_cannot_log_in() {
    let f = fixture();
    f.people.create_guest(guest("ana@mail.com")).unwrap();
    assert!(!f.auth.authenticate(&email("ana@mail.com"), &Password::new("A1!b#").unwrap()));
}

#[test]
fn test_password_change_takes_effect() {
    let f = fixture();
    f.people.create_manager(manager("admin@hotel.com", "A1!b#")).unwrap();
    f.people.update_manager(manager("admin@hotel.com", "z9?Y8")).unwrap();

    assert!(!f.auth.authenticate(&email("admin@hotel.com"), &Password::new("A1!b#").unwrap()));
    assert!(f.auth.authenticate(&email("admin@hotel.com"), &Password::new("z9?Y8").unwrap()));
}
