use std::cell::RefCell;
use std::rc::Rc;

use dioxus::{logger::tracing, prelude::*};

use crate::{
    components::navbar::NavbarComponent,
    router::Route,
    session::{
        cookies::{self, BrowserCookies},
        guard::{self, Decision, NavigationRequest},
    },
};

/// Wraps every route. Re-rendered by the router on each transition, so the
/// cookie is consulted fresh per navigation attempt.
#[component]
pub fn GuardLayout() -> Element {
    let navigator = use_navigator();
    let target = use_route::<Route>();

    // Last route that was actually displayed; a blocked target never becomes
    // the source of the next transition.
    let visited = use_hook(|| Rc::new(RefCell::new(None::<Route>)));

    let request = NavigationRequest {
        target,
        current: visited.borrow().clone(),
    };

    let authenticated = cookies::is_authenticated(&BrowserCookies);
    let decision = guard::decide(&request, authenticated);
    tracing::debug!("{request:?}: {decision}");

    match decision {
        Decision::Allow => {
            visited.replace(Some(request.target));

            rsx! {
                if authenticated {
                    NavbarComponent {}
                }

                Outlet::<Route> {}
            }
        }
        Decision::Redirect(to) => {
            navigator.replace(to);

            rsx! {
                p {
                    "Mengalihkan..."
                }
            }
        }
    }
}
