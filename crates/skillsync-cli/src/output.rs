use serde::Serialize;
use skillsync_core::probe::LinkStatus;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn status_icon(status: LinkStatus) -> &'static str {
    match status {
        LinkStatus::Linked => "✓",
        LinkStatus::Unlinked => "○",
        LinkStatus::Broken => "✗",
    }
}

/// Rendered after the name, per the `list` output contract.
pub fn status_suffix(status: LinkStatus) -> &'static str {
    match status {
        LinkStatus::Broken => " (broken)",
        _ => "",
    }
}
