use crate::container::{GuestContainer, Keyed, ManagerContainer, ReservationContainer, Shared};
use crate::domain::Email;
use crate::person::{Guest, Manager, Person};
use crate::service::{PersonService, ServiceError, ServiceResult};
use tracing::debug;

pub struct PersonController {
    managers: Shared<ManagerContainer>,
    guests: Shared<GuestContainer>,
    reservations: Shared<ReservationContainer>,
}

impl PersonController {
    pub fn new(
        managers: Shared<ManagerContainer>,
        guests: Shared<GuestContainer>,
        reservations: Shared<ReservationContainer>,
    ) -> Self {
        PersonController {
            managers,
            guests,
            reservations,
        }
    }

    fn ensure_email_free(&self, email: &Email) -> ServiceResult<()> {
        if self.managers.borrow().contains(email) {
            return Err(ServiceError::already_exists(Manager::KIND, email));
        }
        if self.guests.borrow().contains(email) {
            return Err(ServiceError::already_exists(Guest::KIND, email));
        }
        Ok(())
    }
}

impl PersonService for PersonController {
    fn create_manager(&self, manager: Manager) -> ServiceResult<()> {
        self.ensure_email_free(manager.email())?;
        debug!(email = %manager.email(), "creating manager");
        self.managers.borrow_mut().include(manager);
        Ok(())
    }

    fn update_manager(&self, manager: Manager) -> ServiceResult<()> {
        let email = manager.email().clone();
        if !self.managers.borrow_mut().update(manager) {
            return Err(ServiceError::not_found(Manager::KIND, &email));
        }
        debug!(%email, "updated manager");
        Ok(())
    }

    fn read_manager(&self, email: &Email) -> ServiceResult<Manager> {
        self.managers
            .borrow()
            .find(email)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(Manager::KIND, email))
    }

    fn delete_manager(&self, email: &Email) -> ServiceResult<()> {
        self.managers
            .borrow_mut()
            .remove(email)
            .ok_or_else(|| ServiceError::not_found(Manager::KIND, email))?;
        debug!(%email, left = self.managers.borrow().len(), "deleted manager");
        Ok(())
    }

    fn list_managers(&self) -> Vec<Manager> {
        self.managers.borrow().list()
    }

    fn create_guest(&self, guest: Guest) -> ServiceResult<()> {
        self.ensure_email_free(guest.email())?;
        debug!(email = %guest.email(), "creating guest");
        self.guests.borrow_mut().include(guest);
        Ok(())
    }

    fn update_guest(&self, guest: Guest) -> ServiceResult<()> {
        let email = guest.email().clone();
        if !self.guests.borrow_mut().update(guest) {
            return Err(ServiceError::not_found(Guest::KIND, &email));
        }
        debug!(%email, "updated guest");
        Ok(())
    }

    fn read_guest(&self, email: &Email) -> ServiceResult<Guest> {
        self.guests
            .borrow()
            .find(email)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(Guest::KIND, email))
    }

    fn delete_guest(&self, email: &Email) -> ServiceResult<()> {
        if !self.guests.borrow().contains(email) {
            return Err(ServiceError::not_found(Guest::KIND, email));
        }
        if let Some(booking) = self.reservations.borrow().iter().find(|r| r.guest == *email) {
            return Err(ServiceError::InUse {
                kind: Guest::KIND,
                key: email.to_string(),
                by: format!("reservation {}", booking.code),
            });
        }
        self.guests.borrow_mut().remove(email);
        debug!(%email, left = self.guests.borrow().len(), "deleted guest");
        Ok(())
    }

    fn list_guests(&self) -> Vec<Guest> {
        self.guests.borrow().list()
    }

    fn find_person(&self, email: &Email) -> ServiceResult<Person> {
        if let Some(manager) = self.managers.borrow().find(email) {
            return Ok(Person::Manager(manager.clone()));
        }
        self.guests
            .borrow()
            .find(email)
            .map(|g| Person::Guest(g.clone()))
            .ok_or_else(|| ServiceError::not_found("person", email))
    }
}
