/**
 * Change Auditor
 *
 * Computes the field-level diff for a proposed schedule update and decides
 * whether an audit record is due. The rule: a record is produced if and
 * only if at least one of `subject` / `class_name` actually differs from
 * the stored entry. Resubmitting identical values is a no-op and leaves the
 * audit trail untouched.
 *
 * `diff_changes` is pure: it never touches storage. The caller persists the
 * returned record in the same transaction as the schedule update, which is
 * what keeps the trail honest across crashes.
 */
use chrono::Utc;

use crate::backend::changelog::db::ChangeLogEntry;
use crate::backend::schedule::db::ScheduleEntry;

/// Diff a proposed partial update against the stored entry
///
/// # Arguments
/// * `existing` - the currently persisted entry
/// * `proposed_subject` - new subject, or `None` for "no change requested"
/// * `proposed_class_name` - new class, or `None` for "no change requested"
/// * `acted_by` - display name of the acting administrator
///
/// # Returns
/// A ready-to-persist audit record, or `None` when nothing changed.
/// The teacher/slot fields are copied from `existing` at call time, and
/// `old_value`/`new_value` are whole-record `"<subject> - <class_name>"`
/// snapshots even when only one field changed.
pub fn diff_changes(
    existing: &ScheduleEntry,
    proposed_subject: Option<&str>,
    proposed_class_name: Option<&str>,
    acted_by: &str,
) -> Option<ChangeLogEntry> {
    // Absent field means "keep", not "clear" (partial-update semantics).
    let final_subject = proposed_subject.unwrap_or(&existing.subject);
    let final_class_name = proposed_class_name.unwrap_or(&existing.class_name);

    // Fixed order: subject description before class description.
    let mut changes = Vec::new();
    if final_subject != existing.subject {
        changes.push(format!("Subject: {} → {}", existing.subject, final_subject));
    }
    if final_class_name != existing.class_name {
        changes.push(format!("Class: {} → {}", existing.class_name, final_class_name));
    }

    if changes.is_empty() {
        return None;
    }

    // The change list is informational only; the persisted record keeps
    // whole-record snapshots.
    tracing::info!("Schedule {} changed: {}", existing.id, changes.join(", "));

    Some(ChangeLogEntry {
        id: uuid::Uuid::new_v4().to_string(),
        schedule_id: existing.id.clone(),
        teacher_id: existing.teacher_id.clone(),
        teacher_name: existing.teacher_name.clone(),
        day: existing.day,
        period: existing.period,
        old_value: format!("{} - {}", existing.subject, existing.class_name),
        new_value: format!("{} - {}", final_subject, final_class_name),
        changed_by: acted_by.to_string(),
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Weekday;
    use pretty_assertions::assert_eq;

    fn existing() -> ScheduleEntry {
        ScheduleEntry {
            id: "sched-1".to_string(),
            teacher_id: "t1".to_string(),
            teacher_name: "Alex Johnson".to_string(),
            day: Weekday::Wednesday,
            period: 4,
            subject: "Mathematics".to_string(),
            class_name: "Grade 10A".to_string(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_noop_produces_no_record() {
        assert!(diff_changes(&existing(), None, None, "Administrator").is_none());
        // Resubmitting identical values is still a no-op
        assert!(
            diff_changes(&existing(), Some("Mathematics"), Some("Grade 10A"), "Administrator")
                .is_none()
        );
    }

    #[test]
    fn test_subject_change_snapshots_whole_record() {
        let record = diff_changes(&existing(), Some("Physics"), None, "Administrator").unwrap();

        assert_eq!(record.old_value, "Mathematics - Grade 10A");
        assert_eq!(record.new_value, "Physics - Grade 10A");
        assert_eq!(record.schedule_id, "sched-1");
        assert_eq!(record.teacher_id, "t1");
        assert_eq!(record.teacher_name, "Alex Johnson");
        assert_eq!(record.day, Weekday::Wednesday);
        assert_eq!(record.period, 4);
        assert_eq!(record.changed_by, "Administrator");
    }

    #[test]
    fn test_class_change_snapshots_whole_record() {
        let record = diff_changes(&existing(), None, Some("Grade 10B"), "Administrator").unwrap();

        assert_eq!(record.old_value, "Mathematics - Grade 10A");
        assert_eq!(record.new_value, "Mathematics - Grade 10B");
    }

    #[test]
    fn test_both_fields_changed() {
        let record =
            diff_changes(&existing(), Some("Physics"), Some("Grade 10B"), "Administrator").unwrap();

        assert_eq!(record.old_value, "Mathematics - Grade 10A");
        assert_eq!(record.new_value, "Physics - Grade 10B");
    }

    #[test]
    fn test_teacher_fields_copied_not_referenced() {
        let mut entry = existing();
        let record = diff_changes(&entry, Some("Physics"), None, "Administrator").unwrap();

        // A later rename of the teacher must not alter the record
        entry.teacher_name = "Renamed Teacher".to_string();
        assert_eq!(record.teacher_name, "Alex Johnson");
    }
}
