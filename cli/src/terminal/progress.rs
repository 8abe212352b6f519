use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Span that carries the parse progress bar for `total` scan files.
///
/// Only spans marked with `indicatif.pb_show` get a bar, so the quiet span is
/// never drawn.
pub fn parse_span(total: usize, quiet: u8) -> Span {
    if quiet > 0 || total == 0 {
        return info_span!("parse");
    }

    let span: Span = info_span!("parse", indicatif.pb_show = true);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.blue} Parsing scan files [{bar:32.green/bright_black}] {pos}/{len}",
    ) {
        span.pb_set_style(&style.progress_chars("█▆▁").tick_strings(TICK_STRINGS));
    }
    span.pb_set_length(total as u64);
    span
}
