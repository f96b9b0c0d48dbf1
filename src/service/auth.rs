use crate::container::{ManagerContainer, Shared};
use crate::domain::{Email, Password};
use crate::service::AuthService;
use tracing::{debug, warn};

pub struct AuthController {
    managers: Shared<ManagerContainer>,
}

impl AuthController {
    pub fn new(managers: Shared<ManagerContainer>) -> Self {
        AuthController { managers }
    }
}

impl AuthService for AuthController {
    fn authenticate(&self, email: &Email, password: &Password) -> bool {
        let granted = self
            .managers
            .borrow()
            .find(email)
            .is_some_and(|m| m.password == *password);
        if granted {
            debug!(%email, "credentials accepted");
        } else {
            warn!(%email, "authentication failed");
        }
        granted
    }
}
