use crate::containers::layout::Layout;
use crate::models::app_state::AppState;
use crate::pages::{DashboardPage, ErrorPage, LoginPage, OpportunitiesPage, RegisterPage};
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The main routes.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Label shown in the header, `None` for routes that never appear there.
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            Self::Home => Some("Home"),
            Self::Login => Some("Login"),
            Self::Register => Some("Register"),
            Self::Dashboard => Some("Dashboard"),
            Self::NotFound => None,
        }
    }

    /// Whether the header offers this route for the given session state.
    pub fn in_nav(&self, authenticated: bool) -> bool {
        match self {
            Self::Home | Self::Dashboard => authenticated,
            Self::Login | Self::Register => !authenticated,
            Self::NotFound => false,
        }
    }
}

/// Where a navigation actually lands.
///
/// The check is synchronous token presence, nothing more: the dashboard
/// falls back to the login page when no token is held, and the auth pages
/// skip ahead to the dashboard when one is.
pub fn gate(route: MainRoute, authenticated: bool) -> MainRoute {
    match route {
        MainRoute::Dashboard if !authenticated => MainRoute::Login,
        MainRoute::Login | MainRoute::Register if authenticated => MainRoute::Dashboard,
        route => route,
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let authenticated = use_selector(|state: &AppState| state.session.authenticated());
    let destination = gate(props.route.clone(), *authenticated);
    if destination != props.route {
        return html! { <Redirect<MainRoute> to={destination} /> };
    }
    match destination {
        MainRoute::Home => html! { <Layout><OpportunitiesPage /></Layout> },
        MainRoute::Login => html! { <Layout><LoginPage /></Layout> },
        MainRoute::Register => html! { <Layout><RegisterPage /></Layout> },
        MainRoute::Dashboard => html! { <Layout><DashboardPage /></Layout> },
        MainRoute::NotFound => html! { <Layout><ErrorPage /></Layout> },
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    html! { <MainRouteView {route} /> }
}
