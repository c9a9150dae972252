//! Human-readable rendering of resolved project records.

use slngraph_core::ProjectRecord;

/// Render one record as a block: `NAME ID:` followed by one tab-indented
/// dependency name per line.
pub fn format_record(record: &ProjectRecord) -> String {
    let mut out = format!("{} {}:", record.name, record.id);
    for dep in &record.dependencies {
        out.push_str("\n\t");
        out.push_str(dep);
    }
    out
}

/// Render all records, one block per record.
pub fn format_records(records: &[ProjectRecord]) -> String {
    records
        .iter()
        .map(format_record)
        .collect::<Vec<_>>()
        .join("\n")
}
