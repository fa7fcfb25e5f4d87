use crate::app;
use zoon::{named_color::*, *};

// ------ ------
//     View
// ------ ------

/// Shared chrome around whatever the nested route renders.
pub fn view(outlet: Option<RawHtmlEl>) -> RawHtmlEl {
    RawHtmlEl::new("div")
        .attr("class", "layout")
        .child(header())
        .child(RawHtmlEl::new("main").attr("class", "row").child(outlet))
}

fn header() -> impl Element {
    Row::new()
        .s(Spacing::new(20))
        .item(RawHtmlEl::new("h1").child("Colors"))
        .item(link("Palette", app::route_tree().href(None)))
}

pub fn link(label: &str, href: String) -> impl Element {
    Link::new()
        .s(Font::new().color(BLUE_4).line(FontLine::new().underline()))
        .label(label)
        .to(href)
}
