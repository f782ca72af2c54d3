use crate::lexer::Span;
use ariadne::{Color, Label, Report, ReportKind, Source};

const ARIADNE_MSG: &str = "Ariadne produces valid utf-8 strings";
const ARIADNE_WRITE_MSG: &str = "Write into buffer should not fail.";

/// Renders a single labelled error report over `text`.
pub fn render_report(
    path: &str,
    text: &str,
    span: Span,
    code: &str,
    message: &str,
    label: &str,
) -> String {
    let mut output = std::io::Cursor::new(Vec::new());
    Report::build(ReportKind::Error, (path, span.range()))
        .with_code(code)
        .with_message(message)
        .with_label(
            Label::new((path, span.range()))
                .with_message(label)
                .with_color(Color::BrightRed),
        )
        .finish()
        .write((path, Source::from(text)), &mut output)
        .expect(ARIADNE_WRITE_MSG);
    String::from_utf8(output.into_inner()).expect(ARIADNE_MSG)
}
