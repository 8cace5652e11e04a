/// Parse a broadcast-style duration token ("PT1H2M30S") into seconds.
///
/// This is the wire format playlist exports use for video lengths.
/// The contract is deliberately lenient: a token with no recognizable
/// `PT` prefix is treated as zero duration, never as an error, and
/// absent components count as zero. Callers rely on malformed metadata
/// degrading to 0s instead of aborting a whole playlist.
pub fn parse_duration(token: &str) -> u32 {
    let Some(start) = token.find("PT") else {
        return 0;
    };
    let rest = &token[start + 2..];

    let (hours, rest) = take_component(rest, 'H');
    let (minutes, rest) = take_component(rest, 'M');
    let (seconds, _) = take_component(rest, 'S');

    hours
        .saturating_mul(3600)
        .saturating_add(minutes.saturating_mul(60))
        .saturating_add(seconds)
}

/// Consume a leading `<digits><unit>` pair. When the digits are not
/// followed by the expected unit letter, nothing is consumed and the
/// component counts as zero.
fn take_component(input: &str, unit: char) -> (u32, &str) {
    let digits_end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    if digits_end == 0 {
        return (0, input);
    }
    if input[digits_end..].starts_with(unit) {
        let value = input[..digits_end].parse().unwrap_or(u32::MAX);
        (value, &input[digits_end + 1..])
    } else {
        (0, input)
    }
}

/// Render a second count as a human-readable duration: "1h 1m 1s",
/// "2m 30s", or "45s". Minutes and seconds are always shown once the
/// next-larger unit is present, even when zero.
pub fn format_duration(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
