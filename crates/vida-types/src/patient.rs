/// One registered patient.
///
/// `phone` keeps the text exactly as it was typed, formatting included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub name: String,
    pub age: u32,
    pub phone: String,
}

impl Patient {
    pub fn new(name: impl Into<String>, age: u32, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            phone: phone.into(),
        }
    }

    pub fn name_contains(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
    }
}
