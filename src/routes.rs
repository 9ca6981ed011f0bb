//! Route table and visibility control
//!
//! The route template is defined once at startup and never mutated.
//! Every render cycle derives a working copy from it; when the external
//! resource-availability signal reports missing resources, the swap and
//! faucet entries are hidden on the copy and a redirect back to home is
//! scheduled. The redirect runs as a deferred continuation so it never
//! interrupts the render pass that observed the signal, and it
//! re-checks the path before acting, so a stale schedule is a no-op.

use once_cell::sync::Lazy;

use crate::errors::SwapViewError;
use crate::global::{self, is_debug_routes_enabled};
use crate::logger::{log, LogTag};

/// Path the deferred redirect navigates back to.
pub const HOME_PATH: &str = "/";

/// Route identifiers. Unique within the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Swap,
    /// Legacy "/Swap" alias kept out of the menu; redirects to home.
    SwapAlias,
    Faucet,
    Stats,
    NotFound,
}

/// What a route renders. Pages themselves are external; this names the
/// view the shell should mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteView {
    Home,
    Swap,
    Faucet,
    Stats,
    RedirectHome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: RouteName,
    /// Hidden entries stay navigable but are dropped from the header menu.
    pub hidden: bool,
    pub view: RouteView,
}

impl RouteDescriptor {
    const fn new(path: &'static str, name: RouteName, hidden: bool, view: RouteView) -> Self {
        Self {
            path,
            name,
            hidden,
            view,
        }
    }
}

/// Routes hidden (and navigated away from) while resources are missing.
const PROTECTED_WHEN_UNAVAILABLE: [RouteName; 2] = [RouteName::Swap, RouteName::Faucet];

/// The immutable route template. The empty path is the default render
/// (the swap page doubles as home), "*" catches everything else.
pub static ROUTE_TEMPLATE: Lazy<Vec<RouteDescriptor>> = Lazy::new(|| {
    vec![
        RouteDescriptor::new("home", RouteName::Home, false, RouteView::Home),
        RouteDescriptor::new("", RouteName::Swap, false, RouteView::Swap),
        RouteDescriptor::new("Swap", RouteName::SwapAlias, true, RouteView::RedirectHome),
        RouteDescriptor::new("faucet", RouteName::Faucet, true, RouteView::Faucet),
        RouteDescriptor::new("stats", RouteName::Stats, false, RouteView::Stats),
        RouteDescriptor::new("*", RouteName::NotFound, false, RouteView::RedirectHome),
    ]
});

/// Result of a visibility pass over the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveRoutes {
    pub routes: Vec<RouteDescriptor>,
    pub should_redirect_home: bool,
}

/// Derive the effective route set for one render cycle.
///
/// The template is cloned; only the clone carries visibility overrides.
/// With resources available the clone equals the template and no
/// redirect is requested.
pub fn compute_effective_routes(
    template: &[RouteDescriptor],
    resources_unavailable: bool,
    current_path: &str,
) -> EffectiveRoutes {
    let mut routes = template.to_vec();

    if !resources_unavailable {
        return EffectiveRoutes {
            routes,
            should_redirect_home: false,
        };
    }

    for route in &mut routes {
        if PROTECTED_WHEN_UNAVAILABLE.contains(&route.name) {
            route.hidden = true;
        }
    }

    let should_redirect_home = current_path != HOME_PATH;

    if is_debug_routes_enabled() {
        log(
            LogTag::Route,
            "VISIBILITY",
            &format!(
                "Resources unavailable: hid {:?}, redirect={} (path '{}')",
                PROTECTED_WHEN_UNAVAILABLE, should_redirect_home, current_path
            ),
        );
    }

    EffectiveRoutes {
        routes,
        should_redirect_home,
    }
}

/// Resolve a navigation path against a route set: exact match first,
/// then the "*" catch-all. Leading slashes are ignored, so "/" resolves
/// the empty default path.
pub fn resolve_route<'a>(
    routes: &'a [RouteDescriptor],
    path: &str,
) -> Option<&'a RouteDescriptor> {
    let normalized = path.trim_start_matches('/');
    routes
        .iter()
        .find(|route| route.path == normalized)
        .or_else(|| routes.iter().find(|route| route.path == "*"))
}

/// Schedule the home redirect to run after the current render pass.
///
/// The continuation re-validates its precondition: if navigation
/// already reached home by the time it runs, it does nothing. That
/// makes the schedule idempotent and removes any need for cancellation.
pub fn schedule_home_redirect() -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let path = global::current_path();
        if path != HOME_PATH {
            global::navigate_to(HOME_PATH);
            log(
                LogTag::Route,
                "REDIRECT",
                &format!("Resources unavailable, navigated '{}' -> '{}'", path, HOME_PATH),
            );
        }
    })
}

/// Validate the route-table invariants: unique names, exactly one
/// catch-all and exactly one default (empty) path.
pub fn validate_route_table(routes: &[RouteDescriptor]) -> Result<(), SwapViewError> {
    let mut seen = std::collections::HashSet::new();
    for route in routes {
        if !seen.insert(route.name) {
            return Err(SwapViewError::RouteTable(format!(
                "duplicate route name {:?}",
                route.name
            )));
        }
    }

    let catch_alls = routes.iter().filter(|route| route.path == "*").count();
    if catch_alls != 1 {
        return Err(SwapViewError::RouteTable(format!(
            "expected exactly one catch-all route, found {}",
            catch_alls
        )));
    }

    let defaults = routes.iter().filter(|route| route.path.is_empty()).count();
    if defaults != 1 {
        return Err(SwapViewError::RouteTable(format!(
            "expected exactly one default route, found {}",
            defaults
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_passes_invariant_validation() {
        validate_route_table(&ROUTE_TEMPLATE).unwrap();
    }

    #[test]
    fn validation_rejects_broken_tables() {
        let duplicate = vec![
            RouteDescriptor::new("", RouteName::Swap, false, RouteView::Swap),
            RouteDescriptor::new("swap2", RouteName::Swap, false, RouteView::Swap),
            RouteDescriptor::new("*", RouteName::NotFound, false, RouteView::RedirectHome),
        ];
        assert!(validate_route_table(&duplicate).is_err());

        let no_catch_all = vec![RouteDescriptor::new(
            "",
            RouteName::Swap,
            false,
            RouteView::Swap,
        )];
        assert!(validate_route_table(&no_catch_all).is_err());
    }

    #[test]
    fn available_resources_leave_template_untouched() {
        let effective = compute_effective_routes(&ROUTE_TEMPLATE, false, "/stats");
        assert_eq!(effective.routes, *ROUTE_TEMPLATE);
        assert!(!effective.should_redirect_home);
    }

    #[test]
    fn unavailable_resources_hide_protected_routes() {
        let effective = compute_effective_routes(&ROUTE_TEMPLATE, true, "/Swap");
        assert!(effective.should_redirect_home);

        for route in &effective.routes {
            match route.name {
                RouteName::Swap | RouteName::Faucet => assert!(route.hidden, "{:?}", route.name),
                RouteName::Home | RouteName::Stats => assert!(!route.hidden, "{:?}", route.name),
                _ => {}
            }
        }

        // The template itself must not pick up the overrides.
        let swap = ROUTE_TEMPLATE
            .iter()
            .find(|route| route.name == RouteName::Swap)
            .unwrap();
        assert!(!swap.hidden);
    }

    #[test]
    fn no_redirect_when_already_home() {
        let effective = compute_effective_routes(&ROUTE_TEMPLATE, true, HOME_PATH);
        assert!(!effective.should_redirect_home);
    }

    #[test]
    fn resolves_paths_with_catch_all_fallback() {
        let home = resolve_route(&ROUTE_TEMPLATE, "/home").unwrap();
        assert_eq!(home.name, RouteName::Home);

        let default = resolve_route(&ROUTE_TEMPLATE, "/").unwrap();
        assert_eq!(default.name, RouteName::Swap);

        let faucet = resolve_route(&ROUTE_TEMPLATE, "faucet").unwrap();
        assert_eq!(faucet.name, RouteName::Faucet);

        let missing = resolve_route(&ROUTE_TEMPLATE, "/does-not-exist").unwrap();
        assert_eq!(missing.name, RouteName::NotFound);
        assert_eq!(missing.view, RouteView::RedirectHome);
    }

    #[tokio::test]
    async fn deferred_redirect_rechecks_the_path() {
        // Away from home: the continuation navigates back.
        crate::global::navigate_to("/stats");
        schedule_home_redirect().await.unwrap();
        assert_eq!(crate::global::current_path(), HOME_PATH);

        // Already home: the continuation is a no-op.
        schedule_home_redirect().await.unwrap();
        assert_eq!(crate::global::current_path(), HOME_PATH);
    }
}
