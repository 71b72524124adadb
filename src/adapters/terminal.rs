use std::io::Write;

use crate::app::formatters::{format_date, format_offset_delta, format_short_time, format_time};
use crate::core::zones;
use crate::domain::model::{ClockFrame, FrameSource, Zone};
use crate::domain::ports::DisplaySink;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub show_date: bool,
    pub show_offset: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_date: true,
            show_offset: true,
        }
    }
}

/// Renders a frame as two zone cards plus the quick reference line.
pub fn render_frame(frame: &ClockFrame, options: &RenderOptions) -> String {
    let mut out = String::new();
    let heading = match frame.source {
        FrameSource::Live => "Live",
        FrameSource::Custom => "Custom time",
    };
    out.push_str(&format!("── {} ──\n", heading));

    for zone in [Zone::Ist, Zone::London] {
        let time = frame.result.for_zone(zone);
        out.push_str(&format!(
            "{:<22} {:<12} {}\n",
            zone.title(),
            zones::offset_label(zone, frame.result.utc_offset_minutes(zone)),
            format_time(time)
        ));
        if options.show_date {
            out.push_str(&format!("{:<35} {}\n", "", format_date(time.wall_clock.date())));
        }
    }

    if options.show_offset {
        out.push_str(&format!(
            "IST is {} ahead of London   {} IST ↔ {} London\n",
            format_offset_delta(frame.offset_delta_hours),
            format_short_time(&frame.result.ist),
            format_short_time(&frame.result.london)
        ));
    }
    out
}

/// Writes every frame to any [`Write`] target, stdout by default.
pub struct TerminalSink<W: Write + Send> {
    writer: W,
    options: RenderOptions,
}

impl TerminalSink<std::io::Stdout> {
    pub fn stdout(options: RenderOptions) -> Self {
        Self::new(std::io::stdout(), options)
    }
}

impl<W: Write + Send> TerminalSink<W> {
    pub fn new(writer: W, options: RenderOptions) -> Self {
        Self { writer, options }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> DisplaySink for TerminalSink<W> {
    fn render(&mut self, frame: &ClockFrame) -> std::io::Result<()> {
        self.writer
            .write_all(render_frame(frame, &self.options).as_bytes())?;
        self.writer.flush()
    }
}

/// Keeps every frame it is given.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<ClockFrame>,
}

impl DisplaySink for RecordingSink {
    fn render(&mut self, frame: &ClockFrame) -> std::io::Result<()> {
        self.frames.push(*frame);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::converter::convert_custom;
    use crate::core::dst::DstPrecision;
    use crate::domain::model::CustomTimeRequest;

    fn custom_frame() -> ClockFrame {
        let result = convert_custom(
            &CustomTimeRequest::new("2026-01-01", "12:00", Zone::Ist),
            DstPrecision::CalendarDay,
        )
        .unwrap();
        ClockFrame {
            source: FrameSource::Custom,
            result,
            offset_delta_hours: 5.5,
        }
    }

    #[test]
    fn test_render_frame_contains_both_zones() {
        let text = render_frame(&custom_frame(), &RenderOptions::default());
        assert!(text.contains("Custom time"));
        assert!(text.contains("Indian Standard Time"));
        assert!(text.contains("12:00:00 PM"));
        assert!(text.contains("06:30:00 AM"));
        assert!(text.contains("UTC+0 (GMT)"));
        assert!(text.contains("Thursday, January 1, 2026"));
        assert!(text.contains("IST is +5.5 hours ahead of London"));
        assert!(text.contains("12:00 IST ↔ 6:30 London"));
    }

    #[test]
    fn test_uk_entry_on_spring_sunday_is_labelled_bst() {
        let result = convert_custom(
            &CustomTimeRequest::new("2026-03-29", "00:30", Zone::London),
            DstPrecision::CalendarDay,
        )
        .unwrap();
        let frame = ClockFrame {
            source: FrameSource::Custom,
            result,
            offset_delta_hours: 4.5,
        };

        let text = render_frame(&frame, &RenderOptions::default());
        let london_line = text
            .lines()
            .find(|line| line.starts_with("London Time"))
            .unwrap();
        assert!(london_line.contains("UTC+1 (BST)"));
        assert!(london_line.contains("12:30:00 AM"));
        assert!(!text.contains("UTC+0 (GMT)"));
    }

    #[test]
    fn test_render_options_hide_sections() {
        let options = RenderOptions {
            show_date: false,
            show_offset: false,
            ..RenderOptions::default()
        };
        let text = render_frame(&custom_frame(), &options);
        assert!(!text.contains("2026"));
        assert!(!text.contains("ahead of London"));
    }

    #[test]
    fn test_terminal_sink_writes_to_buffer() {
        let mut sink = TerminalSink::new(Vec::new(), RenderOptions::default());
        sink.render(&custom_frame()).unwrap();
        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert!(written.starts_with("── Custom time ──"));
    }
}
