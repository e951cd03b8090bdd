use crate::id::Id;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Category {
    pub id: Id,
    pub name: String,
}

impl Category {
    pub const NAME_JOBS: &'static str = "Jobs";
    pub const NAME_SERVICES: &'static str = "Services";
    pub const NAME_REAL_ESTATE: &'static str = "Real Estate";

    pub fn new(id: impl Into<Id>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn is_jobs(&self) -> bool {
        self.name == Self::NAME_JOBS
    }

    /// Categories whose listings are offered by a provider
    /// rather than sold by a seller.
    pub fn is_service_like(&self) -> bool {
        self.name == Self::NAME_SERVICES || self.name == Self::NAME_REAL_ESTATE
    }
}
