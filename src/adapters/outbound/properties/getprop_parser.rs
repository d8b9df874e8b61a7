use crate::boot_check::domain::DeviceProperties;

/// Parses `getprop` output (`[key]: [value]` per line)
///
/// Lines that don't match the format are skipped. Values may be empty and may
/// themselves contain brackets; the value ends at the last `]` on the line.
pub fn parse_getprop_output(output: &str) -> DeviceProperties {
    output.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    let rest = line.strip_prefix('[')?;
    let idx = rest.find("]: [")?;
    let key = &rest[..idx];
    if key.is_empty() {
        return None;
    }

    let value_part = &rest[idx + 4..];
    let end = value_part.rfind(']')?;
    Some((key.to_string(), value_part[..end].to_string()))
}
