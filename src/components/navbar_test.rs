use super::*;

fn paths(role: Role) -> Vec<&'static str> {
    nav_links(role).into_iter().map(|entry| entry.path).collect()
}

#[test]
fn students_get_application_and_cv_links() {
    assert_eq!(paths(Role::Student), vec!["/", "/profile", "/applications", "/ai/analyze-cv", "/ai/chat"]);
}

#[test]
fn recruiters_get_the_common_links_only() {
    assert_eq!(paths(Role::Entreprise), vec!["/", "/profile", "/ai/chat"]);
}

#[test]
fn admins_get_the_console_link() {
    let links = paths(Role::Admin);
    assert!(links.contains(&"/admin"));
    assert!(!links.contains(&"/applications"));
}

#[test]
fn nav_strip_hides_on_auth_pages() {
    assert!(is_auth_page("/login"));
    assert!(is_auth_page("/register"));
    assert!(!is_auth_page("/"));
    assert!(!is_auth_page("/profile"));
}
