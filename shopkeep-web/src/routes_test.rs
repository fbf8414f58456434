//! Tests for the routing system
//!
//! Validates route definitions and navigation metadata for the dashboard's
//! routing infrastructure.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::Customers.to_path(), "/customers");
        assert_eq!(MainRoute::Suppliers.to_path(), "/suppliers");
        assert_eq!(MainRoute::Inventory.to_path(), "/inventory");
        assert_eq!(MainRoute::Appointments.to_path(), "/appointments");
        assert_eq!(MainRoute::Invoices.to_path(), "/invoices");
        assert_eq!(MainRoute::Settings.to_path(), "/settings");
        assert_eq!(MainRoute::NotFound.to_path(), "/404");
    }

    #[test]
    fn test_route_recognition() {
        assert_eq!(MainRoute::recognize("/customers"), Some(MainRoute::Customers));
        assert_eq!(MainRoute::recognize("/settings"), Some(MainRoute::Settings));
        assert_eq!(
            MainRoute::recognize("/does-not-exist"),
            Some(MainRoute::NotFound)
        );
    }

    #[test]
    fn test_nav_routes_exclude_chrome() {
        let nav: Vec<MainRoute> = MainRoute::iter().filter(MainRoute::in_nav).collect();
        assert!(!nav.contains(&MainRoute::Login));
        assert!(!nav.contains(&MainRoute::Settings));
        assert!(!nav.contains(&MainRoute::NotFound));
        assert!(nav.contains(&MainRoute::Home));
        assert!(nav.contains(&MainRoute::Appointments));
    }

    #[test]
    fn test_every_route_has_a_label() {
        for route in MainRoute::iter() {
            assert!(!route.label().is_empty());
        }
    }
}
