//! Shared query cache.
//!
//! Views subscribe to the generation of their own key through [`use_query`]. Mutations bump the
//! generation of the affected resources, which makes every subscribed view refetch.

use std::{collections::HashMap, future::Future};

use dioxus::prelude::*;

use crate::client::{
    api::ApiClient, config::ClientConfig, error::ClientError, store::session::SessionState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryResource {
    LatestTickets,
    AdvertisedTickets,
    Catalog,
    Ticket,
    ManagedTickets,
    ApprovedTickets,
    Inventory,
    CustomerOrders,
    SellerOrders,
    Statistics,
    Users,
    SellerRequests,
}

impl QueryResource {
    /// Everything derived from ticket offers.
    pub const TICKETS: [QueryResource; 7] = [
        Self::LatestTickets,
        Self::AdvertisedTickets,
        Self::Catalog,
        Self::Ticket,
        Self::ManagedTickets,
        Self::ApprovedTickets,
        Self::Inventory,
    ];

    pub const ORDERS: [QueryResource; 3] =
        [Self::CustomerOrders, Self::SellerOrders, Self::Statistics];
}

/// Logical resource plus an optional scope such as a viewer email or ticket id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub resource: QueryResource,
    pub scope: Option<String>,
}

impl QueryKey {
    pub fn new(resource: QueryResource) -> Self {
        Self {
            resource,
            scope: None,
        }
    }

    pub fn scoped(resource: QueryResource, scope: impl Into<String>) -> Self {
        Self {
            resource,
            scope: Some(scope.into()),
        }
    }

    pub fn scope(&self) -> &str {
        self.scope.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryCache {
    resources: HashMap<QueryResource, u64>,
}

impl QueryCache {
    pub fn generation(&self, key: &QueryKey) -> u64 {
        self.resources.get(&key.resource).copied().unwrap_or_default()
    }

    /// Mark every key of each resource stale.
    pub fn invalidate(&mut self, resources: &[QueryResource]) {
        for resource in resources {
            *self.resources.entry(*resource).or_default() += 1;
        }
    }
}

/// Run `fetch` for `key`, refetching whenever the key changes or is invalidated.
///
/// `fetch` receives an [`ApiClient`] carrying the current session token.
pub fn use_query<T, F, Fut>(key: QueryKey, mut fetch: F) -> Resource<Result<T, ClientError>>
where
    T: 'static,
    F: FnMut(ApiClient, QueryKey) -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let cache = use_context::<Signal<QueryCache>>();
    let session = use_context::<Signal<SessionState>>();
    let config = use_context::<ClientConfig>();

    let tracked = use_memo(use_reactive((&key,), move |(key,)| {
        let generation = cache.read().generation(&key);
        (key, generation)
    }));

    use_resource(move || {
        let (key, _) = tracked();
        let api = ApiClient::new(&config.api_url, session.read().token());
        fetch(api, key)
    })
}
