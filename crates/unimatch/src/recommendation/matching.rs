use crate::catalog::Program;

/// Specialty predicate shared by the filter and the ranker.
///
/// A program matches a requested specialty when the specialty is a case-insensitive
/// substring of the program name, or equals the program's group code or code ignoring case.
#[derive(Debug, Clone)]
pub struct SpecialtyMatcher {
    needles: Vec<String>,
}

impl SpecialtyMatcher {
    pub fn new(specialties: &[String]) -> Self {
        Self {
            needles: specialties
                .iter()
                .map(|specialty| specialty.to_lowercase())
                .filter(|needle| !needle.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needles.is_empty()
    }

    pub fn matches(&self, program: &Program) -> bool {
        let name = program.name.to_lowercase();
        let group_code = program.group_code.as_deref().map(str::to_lowercase);
        let code = program.code.as_deref().map(str::to_lowercase);

        self.needles.iter().any(|needle| {
            name.contains(needle.as_str())
                || group_code.as_deref() == Some(needle.as_str())
                || code.as_deref() == Some(needle.as_str())
        })
    }

    pub fn any_match<'p, I>(&self, programs: I) -> bool
    where
        I: IntoIterator<Item = &'p Program>,
    {
        programs.into_iter().any(|program| self.matches(program))
    }
}
