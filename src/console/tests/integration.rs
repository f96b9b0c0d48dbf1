use crate::console::tests::utils::{ScriptedTerminal, Services, services};
use crate::console::{AuthConsole, Integration, PersonnelConsole, ReservationConsole};
use crate::service::tests::utils::email;
use crate::service::{PersonService, ReservationService};

fn integration(s: &Services) -> Integration {
    Integration::new(
        Box::new(AuthConsole::new(s.auth.clone(), s.people.clone())),
        Box::new(PersonnelConsole::new(s.people.clone())),
        Box::new(ReservationConsole::new(s.bookings.clone(), s.people.clone())),
    )
}

fn run(s: &Services, lines: &[&str]) -> ScriptedTerminal {
    let mut term = ScriptedTerminal::new(lines);
    integration(s).run(&mut term).unwrap();
    term
}

#[test]
fn test_full_session() {
    let s = services();
    let term = run(
        &s,
        &[
            "login",
            "admin@hotel.com",
            "A1!b#",
            "profile",
            "extension",
            "20",
            "back",
            "manage",
            "room rm 102",
            "back",
            "logout",
            "exit",
        ],
    );

    let out = term.transcript();
    assert!(out.contains("welcome, admin@hotel.com"));
    assert!(out.contains("admin@hotel.com>> "));
    assert!(out.contains("room 102 deleted"));
    assert!(out.ends_with("Goodbye."));
    assert_eq!(0, term.remaining());
    assert_eq!(
        20,
        s.people.read_manager(&email("admin@hotel.com")).unwrap().extension.value()
    );
    assert_eq!(1, s.bookings.list_rooms().len());
}

#[test]
fn test_failed_login_stays_in_start_menu() {
    let s = services();
    let term = run(&s, &["login", "admin@hotel.com", "B2!c#", "manage", "exit"]);

    let out = term.transcript();
    assert!(out.contains("authentication failed"));
    assert!(out.contains("Unknown command: manage"));
    assert!(!out.contains("admin@hotel.com>> "));
}

#[test]
fn test_signup_then_login() {
    let s = services();
    let term = run(
        &s,
        &[
            "signup",
            "Carla Dias",
            "carla@hotel.com",
            "12",
            "x9#Y7",
            "login",
            "carla@hotel.com",
            "x9#Y7",
            "exit",
        ],
    );

    let out = term.transcript();
    assert!(out.contains("manager carla@hotel.com registered"));
    assert!(out.contains("welcome, carla@hotel.com"));
    assert_eq!(0, term.remaining());
}

#[test]
fn test_end_of_input_closes_every_menu() {
    let s = services();
    let term = run(&s, &["login", "admin@hotel.com", "A1!b#", "manage", "hotel ls"]);

    let out = term.transcript();
    assert!(out.contains("Hotel Central"));
    assert!(out.ends_with("Goodbye."));
}

#[test]
fn test_logout_returns_to_start_menu() {
    let s = services();
    let term = run(&s, &["login", "admin@hotel.com", "A1!b#", "logout", "help"]);

    let out = term.transcript();
    assert!(out.contains("signup"));
    assert!(term.commands.contains(&"login".to_string()));
}

#[test]
fn test_ctrl_d_in_session_logs_out_instead_of_exiting() {
    let s = services();
    let mut term = ScriptedTerminal::with_events(&[
        Some("login"),
        Some("admin@hotel.com"),
        Some("A1!b#"),
        Some("profile"),
        None,
        Some("help"),
        None,
        Some("help"),
        Some("exit"),
    ]);
    integration(&s).run(&mut term).unwrap();

    assert_eq!(0, term.remaining());
    let out = term.transcript();
    let session_closed = out.rfind("admin@hotel.com>> ").unwrap();
    let back_at_start = &out[session_closed..];
    assert!(back_at_start.contains("\n>> "));
    assert!(back_at_start.contains("Register a new manager"));
    assert!(out.ends_with("Goodbye."));
}
