use comrak::{ComrakOptions, markdown_to_html};
use once_cell::sync::Lazy;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    // raw HTML in message text is escaped, never injected
    options.render.escape = true;
    options
});

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] = format_description!(
    "[hour repr:12 padding:zero]:[minute padding:zero]:[second padding:zero] [period case:upper]"
);

pub fn message_html(md: &str) -> String {
    markdown_to_html(md, &MARKDOWN_OPTIONS)
}

/// Time-of-day label in the local offset, or UTC when it cannot be determined.
pub fn format_message_timestamp(timestamp: OffsetDateTime) -> String {
    let local = UtcOffset::current_local_offset()
        .map(|offset| timestamp.to_offset(offset))
        .unwrap_or(timestamp);
    format_time_of_day(local)
}

pub fn format_time_of_day(datetime: OffsetDateTime) -> String {
    datetime.format(MESSAGE_TIME_FORMAT).unwrap_or_default()
}
