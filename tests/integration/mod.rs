//! Integration tests for the console summary renderer


use console_summary::{ApplicationDescriptor, PlainSink, SummaryRenderer};

/// Render to an in-memory plain sink and return the output as a string.
pub fn render_plain(renderer: &SummaryRenderer, app: &ApplicationDescriptor) -> String {
    let mut sink = PlainSink::new(Vec::new());
    renderer.render(app, &mut sink).unwrap();
    String::from_utf8(sink.into_inner()).unwrap()
}
