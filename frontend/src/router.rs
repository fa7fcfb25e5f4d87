use crate::app;
use shared::EventId;
use zoon::{println, *};

// ------ router ------

#[static_ref]
pub fn router() -> &'static Router<Route> {
    Router::new(|route: Option<Route>| {
        let url = routing::url();
        println!("{}", url);

        // The route tree decides what renders, the typed routes only tell us the URL changed.
        if route.is_none() {
            println!("Unknown route {}", url);
        }
        app::set_route_match(app::route_tree().resolve(&url));
    })
}

// ------ Route ------

#[route]
#[derive(Clone)]
pub enum Route {
    #[route("colors", event_id)]
    Event { event_id: EventId },

    #[route("colors")]
    Index,
}
