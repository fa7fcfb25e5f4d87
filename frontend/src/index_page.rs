use crate::{app, layout};
use shared::{Color, EventId};
use zoon::*;

// ------ ------
//     View
// ------ ------

/// With an outlet this is the palette plus the nested content; as the innermost view it shows
/// the selected event, or a hint when nothing is selected.
pub fn view(event_id: Option<EventId>, outlet: Option<RawHtmlEl>) -> RawHtmlEl {
    match (outlet, event_id) {
        (Some(outlet), event_id) => RawHtmlEl::new("div")
            .attr("class", "row")
            .child(palette(event_id))
            .child(outlet),
        (None, Some(event_id)) => event_detail(event_id),
        (None, None) => RawHtmlEl::new("div")
            .attr("class", "row")
            .child(palette(None))
            .child(RawHtmlEl::new("p").child("Pick a color to see its details.")),
    }
}

fn palette(selected: Option<EventId>) -> RawHtmlEl {
    RawHtmlEl::new("ul")
        .attr("class", "col-md-4 palette")
        .children_signal_vec(
            app::colors()
                .signal_vec_cloned()
                .map(move |color| swatch(color, selected.as_deref())),
        )
}

fn swatch(color: Color, selected: Option<&str>) -> RawHtmlEl {
    let id = color.id.to_string();
    let class = if selected == Some(id.as_str()) {
        "current"
    } else {
        ""
    };
    RawHtmlEl::new("li")
        .attr("class", class)
        .child(color_chip(&color))
        .child(layout::link(&color.name, app::route_tree().href(Some(&id))))
}

fn color_chip(color: &Color) -> RawHtmlEl {
    RawHtmlEl::new("span")
        .attr("class", "chip")
        .attr(
            "style",
            format!("background-color: {}", color.hex_code()).as_str(),
        )
}

fn event_detail(event_id: EventId) -> RawHtmlEl {
    RawHtmlEl::new("div")
        .attr("class", "col-md-8 event")
        .child(RawHtmlEl::new("h2").child(format!("Event {}", event_id)))
        .child_signal(
            app::colors()
                .signal_vec_cloned()
                .to_signal_cloned()
                .map(move |colors| {
                    colors
                        .into_iter()
                        .find(|color| color.id.to_string() == event_id)
                        .map(color_detail)
                }),
        )
}

fn color_detail(color: Color) -> RawHtmlEl {
    let hex_code = color.hex_code();
    RawHtmlEl::new("dl")
        .child(RawHtmlEl::new("dt").child("Name"))
        .child(RawHtmlEl::new("dd").child(color.name.clone()))
        .child(RawHtmlEl::new("dt").child("Hex"))
        .child(RawHtmlEl::new("dd").child(color_chip(&color)).child(hex_code))
        .child(RawHtmlEl::new("dt").child("RGB"))
        .child(
            RawHtmlEl::new("dd").child(format!("{}, {}, {}", color.red, color.green, color.blue)),
        )
        .child(
            color
                .is_primary
                .then(|| RawHtmlEl::new("dd").attr("class", "primary").child("Primary color")),
        )
}
