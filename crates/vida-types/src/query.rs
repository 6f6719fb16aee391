use crate::Patient;

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub count: usize,
    pub average_age: f64,
    pub youngest: Patient,
    pub oldest: Patient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientList {
    pub patients: Vec<Patient>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    NoPatients,
    /// `query` is the lowercased text that was searched for.
    NoMatches { query: String },
    Found(Vec<Patient>),
}

impl SearchOutcome {
    pub fn matches(&self) -> &[Patient] {
        match self {
            SearchOutcome::Found(patients) => patients,
            _ => &[],
        }
    }
}
