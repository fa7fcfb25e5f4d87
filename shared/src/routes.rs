use crate::AppConfig;
use std::borrow::Cow;
use std::collections::BTreeMap;
use tracing::{debug, trace};
use url::Url;

pub type EventId = String;

/// Name of the dynamic segment carrying the selected event.
pub const EVENT_ID_PARAM: &str = "eventId";

const STATIC_SEGMENT_SCORE: usize = 10;
const DYNAMIC_SEGMENT_SCORE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Layout,
    Index,
}

// ------ ------
//    Pattern
// ------ ------

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Dynamic(String),
}

/// A path pattern relative to its parent route, e.g. `""` or `":eventId"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => Segment::Dynamic(name.to_owned()),
                None => Segment::Static(segment.to_owned()),
            })
            .collect();
        Self { segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn score(&self) -> usize {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Static(_) => STATIC_SEGMENT_SCORE,
                Segment::Dynamic(_) => DYNAMIC_SEGMENT_SCORE,
            })
            .sum()
    }

    /// Matches the pattern against the start of `path`, binding dynamic segments into `params`.
    /// Returns the number of path segments consumed.
    fn match_prefix(&self, path: &[String], params: &mut Params) -> Option<usize> {
        if path.len() < self.segments.len() {
            return None;
        }
        for (segment, actual) in self.segments.iter().zip(path) {
            match segment {
                Segment::Static(text) => {
                    if !text.eq_ignore_ascii_case(actual) {
                        return None;
                    }
                }
                Segment::Dynamic(name) => params.insert(name, decode_segment(actual)),
            }
        }
        Some(self.segments.len())
    }
}

// ------ ------
//    Params
// ------ ------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, name: &str, value: String) {
        self.0.insert(name.to_owned(), value);
    }
}

// ------ ------
//     Tree
// ------ ------

#[derive(Debug, Clone)]
pub struct RouteNode {
    pattern: RoutePattern,
    view: ViewKind,
    children: Vec<RouteNode>,
}

impl RouteNode {
    pub fn new(pattern: &str, view: ViewKind) -> Self {
        Self {
            pattern: RoutePattern::parse(pattern),
            view,
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: RouteNode) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Debug, Clone)]
pub struct RouteTree {
    base: Vec<String>,
    roots: Vec<RouteNode>,
}

impl RouteTree {
    pub fn new(base_path: &str) -> Self {
        Self {
            base: path_segments(base_path),
            roots: Vec::new(),
        }
    }

    pub fn route(mut self, node: RouteNode) -> Self {
        self.roots.push(node);
        self
    }

    /// `/colors` renders the layout with the index inside it, `/colors/:eventId` additionally
    /// nests a second index bound to the event.
    pub fn colors(config: &AppConfig) -> Self {
        Self::new(&config.base_path).route(
            RouteNode::new("", ViewKind::Layout).child(
                RouteNode::new("", ViewKind::Index)
                    .child(RouteNode::new(":eventId", ViewKind::Index)),
            ),
        )
    }

    /// Picks the most specific branch of the tree matching `location` (a path or a full URL).
    /// `None` means nothing from this tree renders.
    pub fn resolve(&self, location: &str) -> Option<RouteMatch> {
        let segments = path_segments(location);
        let Some(rest) = self.strip_base(&segments) else {
            trace!(location, "outside of base path");
            return None;
        };

        let mut best = None;
        let mut views = Vec::new();
        for root in &self.roots {
            visit(root, rest, &mut views, &Params::default(), 0, &mut best);
        }

        match best {
            Some(Candidate { views, params, .. }) => {
                debug!(location, ?views, ?params, "route resolved");
                Some(RouteMatch { views, params })
            }
            None => {
                debug!(location, "no route matched");
                None
            }
        }
    }

    /// Absolute path to the index, optionally with an event selected.
    pub fn href(&self, event_id: Option<&str>) -> String {
        let mut href = String::new();
        for segment in &self.base {
            href.push('/');
            href.push_str(segment);
        }
        if let Some(event_id) = event_id {
            href.push('/');
            href.push_str(&urlencoding::encode(event_id));
        }
        if href.is_empty() {
            href.push('/');
        }
        href
    }

    fn strip_base<'a>(&self, segments: &'a [String]) -> Option<&'a [String]> {
        if segments.len() < self.base.len() {
            return None;
        }
        let (base, rest) = segments.split_at(self.base.len());
        base.iter()
            .zip(&self.base)
            .all(|(actual, expected)| actual.eq_ignore_ascii_case(expected))
            .then_some(rest)
    }
}

struct Candidate {
    score: usize,
    views: Vec<ViewKind>,
    params: Params,
}

fn visit(
    node: &RouteNode,
    path: &[String],
    views: &mut Vec<ViewKind>,
    params: &Params,
    score: usize,
    best: &mut Option<Candidate>,
) {
    let mut params = params.clone();
    // Children extend the parent's pattern, so a parent mismatch prunes the whole subtree.
    let Some(consumed) = node.pattern.match_prefix(path, &mut params) else {
        return;
    };
    let path = &path[consumed..];
    let score = score + node.pattern.score();
    views.push(node.view);

    if path.is_empty() {
        let is_better = match best {
            None => true,
            Some(best) => (score, views.len()) > (best.score, best.views.len()),
        };
        if is_better {
            *best = Some(Candidate {
                score,
                views: views.clone(),
                params: params.clone(),
            });
        }
    }
    for child in &node.children {
        visit(child, path, views, &params, score, best);
    }

    views.pop();
}

// ------ ------
//     Match
// ------ ------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    views: Vec<ViewKind>,
    params: Params,
}

impl RouteMatch {
    /// Matched views, outermost first.
    pub fn views(&self) -> &[ViewKind] {
        &self.views
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn event_id(&self) -> Option<&str> {
        self.params.get(EVENT_ID_PARAM)
    }

    /// Renders the view chain innermost first, handing every view its rendered child
    /// as the outlet. The innermost view gets `None`.
    pub fn compose<N>(&self, mut render: impl FnMut(ViewKind, Option<N>) -> N) -> Option<N> {
        self.views
            .iter()
            .rev()
            .fold(None, |outlet, view| Some(render(*view, outlet)))
    }
}

// ------ ------
//     Utils
// ------ ------

/// Host used to resolve bare paths into URLs; never leaves this module.
const PATH_BASE: &str = "http://localhost/";

/// Non-empty, still percent-encoded path segments of a path or URL. Scheme, host, query and
/// fragment are dropped. Anything without a host is a path, even if it contains `://`.
fn path_segments(location: &str) -> Vec<String> {
    let url = match Url::parse(location) {
        Ok(url) if url.has_host() => Ok(url),
        _ => Url::parse(PATH_BASE)
            .and_then(|base| base.join(&format!("/{}", location.trim_start_matches('/')))),
    };
    match url {
        Ok(url) => url
            .path_segments()
            .map(|segments| {
                segments
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default(),
        Err(error) => {
            trace!(location, %error, "unparsable location");
            Vec::new()
        }
    }
}

/// Percent-decodes a path segment. Invalid UTF-8 leaves the segment as is.
fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_owned())
}
