use crate::{index_page, layout};
use shared::{AppConfig, Color, DownMsg, RouteMatch, RouteTree, UpMsg, ViewKind};
use zoon::{eprintln, println, static_ref, Connection, Mutable, MutableVec, RawHtmlEl, Task, *};

// ------ ------
//    States
// ------ ------

#[static_ref]
pub fn route_tree() -> &'static RouteTree {
    RouteTree::colors(&AppConfig::default())
}

#[static_ref]
fn route_match() -> &'static Mutable<Option<RouteMatch>> {
    Mutable::new(None)
}

#[static_ref]
pub fn colors() -> &'static MutableVec<Color> {
    MutableVec::new()
}

#[static_ref]
pub fn connection() -> &'static Connection<UpMsg, DownMsg> {
    Connection::new(|down_msg, cor_id| match down_msg {
        DownMsg::ColorsLoaded(palette) => {
            println!("Loaded {} colors, cor_id: {}", palette.len(), cor_id);
            colors().lock_mut().replace_cloned(palette);
        }
    })
}

// ------ ------
//   Commands
// ------ ------

pub fn set_route_match(matched: Option<RouteMatch>) {
    if matched.is_none() {
        println!("Nothing to render for {}", routing::url());
    }
    route_match().set(matched);
}

pub fn load_colors() {
    Task::start(async {
        let result = connection().send_up_msg(UpMsg::LoadColors).await;
        if let Err(error) = result {
            eprintln!("Failed to send load colors message: {:?}", error);
        }
    });
}

// ------ ------
//     View
// ------ ------

pub fn root() -> RawHtmlEl {
    RawHtmlEl::new("div").attr("class", "container").child_signal(
        route_match()
            .signal_cloned()
            .map(|matched| matched.and_then(|matched| render(&matched))),
    )
}

fn render(matched: &RouteMatch) -> Option<RawHtmlEl> {
    let event_id = matched.event_id().map(str::to_owned);
    matched.compose(|view, outlet| match view {
        ViewKind::Layout => layout::view(outlet),
        ViewKind::Index => index_page::view(event_id.clone(), outlet),
    })
}
