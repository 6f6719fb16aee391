use tracing::debug;
use vida_types::{Patient, PatientList, SearchOutcome, Statistics};

/// Append-only, insertion-ordered collection of patients.
///
/// Nothing is cached: every query scans the records again.
#[derive(Debug, Default)]
pub struct PatientRegistry {
    patients: Vec<Patient>,
}

impl PatientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. Inputs are expected to be validated already.
    pub fn register(&mut self, name: String, age: u32, phone: String) {
        self.patients.push(Patient { name, age, phone });
        debug!("Registered patient #{}", self.patients.len());
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn statistics(&self) -> Option<Statistics> {
        let first = self.patients.first()?;

        let mut youngest = first;
        let mut oldest = first;
        let mut age_sum: u64 = 0;

        for patient in &self.patients {
            age_sum += u64::from(patient.age);
            // strict comparisons: ties stay with the earlier record
            if patient.age < youngest.age {
                youngest = patient;
            }
            if patient.age > oldest.age {
                oldest = patient;
            }
        }

        let count = self.patients.len();
        debug!("Computed statistics over {} patients", count);

        Some(Statistics {
            count,
            average_age: age_sum as f64 / count as f64,
            youngest: youngest.clone(),
            oldest: oldest.clone(),
        })
    }

    pub fn search(&self, query: &str) -> SearchOutcome {
        if self.patients.is_empty() {
            return SearchOutcome::NoPatients;
        }

        let query = query.to_lowercase();
        let found: Vec<Patient> = self
            .patients
            .iter()
            .filter(|p| p.name_contains(&query))
            .cloned()
            .collect();

        debug!("Search for {:?} matched {} patients", query, found.len());

        if found.is_empty() {
            SearchOutcome::NoMatches { query }
        } else {
            SearchOutcome::Found(found)
        }
    }

    pub fn list_all(&self) -> Option<PatientList> {
        if self.patients.is_empty() {
            return None;
        }
        Some(PatientList {
            patients: self.patients.clone(),
            total: self.patients.len(),
        })
    }
}
