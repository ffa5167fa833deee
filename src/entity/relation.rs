/// Loaded/not-loaded state for a navigable relation on an entity snapshot.
///
/// The data layer decides whether to materialize a relation before handing
/// the snapshot over; shapers branch on `is_loaded` and never trigger a
/// fetch themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relation<T> {
    NotLoaded,
    Loaded(T),
}

impl<T> Relation<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Relation::Loaded(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Relation::Loaded(value) => Some(value),
            Relation::NotLoaded => None,
        }
    }
}

impl<T> Default for Relation<T> {
    fn default() -> Self {
        Relation::NotLoaded
    }
}

impl<T> From<T> for Relation<T> {
    fn from(value: T) -> Self {
        Relation::Loaded(value)
    }
}
