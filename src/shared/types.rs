/**
 * Core Enumerations
 *
 * Weekday and role types shared by the schedule, changelog and auth modules.
 * Both are stored as TEXT in SQLite and serialized with the same spelling,
 * so a value read from the database round-trips through JSON unchanged.
 */
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A schedulable weekday. The timetable covers Monday through Friday;
/// weekend values do not exist and deserialization rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "PascalCase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays in timetable order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Canonical wire/storage spelling ("Monday", ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Monday" => Ok(Weekday::Monday),
            "Tuesday" => Ok(Weekday::Tuesday),
            "Wednesday" => Ok(Weekday::Wednesday),
            "Thursday" => Ok(Weekday::Thursday),
            "Friday" => Ok(Weekday::Friday),
            other => Err(format!("'{}' is not a schedulable weekday", other)),
        }
    }
}

/// Account role. Determines visibility scope: teachers only ever see their
/// own schedules and changelogs, administrators see everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_round_trip() {
        for day in Weekday::ALL {
            let parsed: Weekday = day.as_str().parse().unwrap();
            assert_eq!(parsed, day);
        }
    }

    #[test]
    fn test_weekday_rejects_weekend() {
        assert!("Saturday".parse::<Weekday>().is_err());
        assert!("Sunday".parse::<Weekday>().is_err());
        assert!("monday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_weekday_json_spelling() {
        let json = serde_json::to_string(&Weekday::Wednesday).unwrap();
        assert_eq!(json, "\"Wednesday\"");
        let day: Weekday = serde_json::from_str("\"Friday\"").unwrap();
        assert_eq!(day, Weekday::Friday);
    }

    #[test]
    fn test_role_json_spelling() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"teacher\"").unwrap();
        assert_eq!(role, Role::Teacher);
        assert!(!role.is_admin());
    }
}
