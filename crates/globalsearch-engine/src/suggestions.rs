/// Example queries shown before the user types anything.
const SUGGESTIONS: &[&str] = &["Centro", "Sector Norte", "admin", "Roles", "Audit log", "Profile"];

pub fn suggestions() -> &'static [&'static str] {
    SUGGESTIONS
}
