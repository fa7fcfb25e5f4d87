use moon::*;
use shared::{DownMsg, UpMsg};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod palette;

// The client mounts into this element; see `shared::MOUNT_ELEMENT_ID`.
const BODY_CONTENT: &str = r#"<div id="root"></div>"#;

async fn frontend() -> Frontend {
    Frontend::new()
        .title("Colors")
        .default_styles(false)
        .append_to_head(r#"<link href="/_api/public/css/colors.css" rel="stylesheet"/>"#)
        .body_content(BODY_CONTENT)
}

async fn up_msg_handler(req: UpMsgRequest<UpMsg>) {
    debug!("request: {:?}", req);
    let UpMsgRequest {
        up_msg,
        cor_id,
        session_id,
        ..
    } = req;

    let down_msg = reply(up_msg);
    match sessions::by_session_id().wait_for(session_id).await {
        Some(session) => session.send_down_msg(&down_msg, cor_id).await,
        None => warn!("cannot find the session with id `{}`", session_id),
    }
}

fn reply(up_msg: UpMsg) -> DownMsg {
    match up_msg {
        UpMsg::LoadColors => {
            let colors = palette::colors();
            info!(count = colors.len(), "sending palette");
            DownMsg::ColorsLoaded(colors)
        }
    }
}

#[moon::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    start(frontend, up_msg_handler, |_| {}).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MOUNT_ELEMENT_ID;

    #[test]
    fn shell_contains_mount_target() {
        let target = format!(r#"id="{}""#, MOUNT_ELEMENT_ID);
        assert!(BODY_CONTENT.contains(&target));
    }

    #[test]
    fn load_colors_is_answered_with_the_palette() {
        match reply(UpMsg::LoadColors) {
            DownMsg::ColorsLoaded(colors) => assert_eq!(colors, palette::colors()),
        }
    }
}
