//! Departments a ticket can be submitted to.

use std::fmt;
use std::str::FromStr;

/// Identifier of one of the fixed departments.
///
/// The set is closed: screens match on it exhaustively, and selecting a
/// department outside this set is impossible by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepartmentId {
    /// Digital Infrastructure & Technology.
    Dit,
    /// Design & Branding.
    Creative,
    /// Human Capital.
    Hco,
    /// Compliance & Law.
    Legal,
    /// Customer Relations.
    Crm,
}

impl DepartmentId {
    /// All departments in card order.
    pub const ALL: [Self; 5] = [Self::Dit, Self::Creative, Self::Hco, Self::Legal, Self::Crm];

    /// Stable lowercase identifier, e.g. for CLI arguments.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dit => "dit",
            Self::Creative => "creative",
            Self::Hco => "hco",
            Self::Legal => "legal",
            Self::Crm => "crm",
        }
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown department identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown department `{0}`, expected one of: dit, creative, hco, legal, crm")]
pub struct UnknownDepartment(String);

impl FromStr for DepartmentId {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dit" => Ok(Self::Dit),
            "creative" => Ok(Self::Creative),
            "hco" => Ok(Self::Hco),
            "legal" => Ok(Self::Legal),
            "crm" => Ok(Self::Crm),
            other => Err(UnknownDepartment(other.to_string())),
        }
    }
}

/// A department card shown on the selection screen.
#[derive(Debug, Clone)]
pub struct Department {
    id: DepartmentId,
    title: String,
    subtitle: String,
    services: Vec<String>,
    featured: bool,
}

impl Department {
    /// Creates a department record.
    #[must_use]
    pub fn new(
        id: DepartmentId,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        services: Vec<String>,
        featured: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            subtitle: subtitle.into(),
            services,
            featured,
        }
    }

    /// Identifier.
    #[must_use]
    pub const fn id(&self) -> DepartmentId {
        self.id
    }

    /// Display title, e.g. `DIT`.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Short description line.
    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    /// Services offered by this department.
    #[must_use]
    pub fn services(&self) -> &[String] {
        &self.services
    }

    /// Whether the card is rendered in the highlighted dark style.
    #[must_use]
    pub const fn is_featured(&self) -> bool {
        self.featured
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("dit", DepartmentId::Dit)]
    #[test_case("CREATIVE", DepartmentId::Creative)]
    #[test_case("hco", DepartmentId::Hco)]
    #[test_case("Legal", DepartmentId::Legal)]
    #[test_case("crm", DepartmentId::Crm)]
    fn test_parse(input: &str, expected: DepartmentId) {
        assert_eq!(input.parse::<DepartmentId>(), Ok(expected));
    }

    #[test]
    fn test_parse_unknown() {
        assert!("payroll".parse::<DepartmentId>().is_err());
    }

    #[test]
    fn test_roundtrip_all() {
        for id in DepartmentId::ALL {
            assert_eq!(id.as_str().parse::<DepartmentId>(), Ok(id));
        }
    }
}
