use std::fmt;

/// The kinds of owned records the access guards operate on
///
/// Used to name the record in guard error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Entry,
    MedicalContact,
    Medication,
    InsuranceCard,
}

impl ResourceKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::MedicalContact => "Medical contact",
            Self::Medication => "Medication",
            Self::InsuranceCard => "Insurance card",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Self::Entry => "entries",
            Self::MedicalContact => "medical contacts",
            Self::Medication => "medications",
            Self::InsuranceCard => "insurance cards",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
