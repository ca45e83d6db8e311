use crate::{
    client::{
        api::{transport::Method, ApiClient, Auth},
        error::ClientError,
    },
    model::{
        api::MutationResultDto,
        ticket::{NewTicketDto, TicketDto, TicketPatchDto},
    },
};

/// Number of tickets shown in the home page "Latest Tickets" section.
pub const LATEST_LIMIT: usize = 8;

fn ticket_path(id: &str) -> String {
    format!("/tickets/{}", urlencoding::encode(id))
}

impl ApiClient {
    /// Approved tickets, optionally limited to the most recent `limit`.
    pub async fn get_tickets(&self, limit: Option<usize>) -> Result<Vec<TicketDto>, ClientError> {
        let path = match limit {
            Some(limit) => format!("/tickets?limit={limit}"),
            None => "/tickets".to_string(),
        };

        self.get_list(&path, Auth::Public).await
    }

    pub async fn get_latest_tickets(&self) -> Result<Vec<TicketDto>, ClientError> {
        self.get_tickets(Some(LATEST_LIMIT)).await
    }

    pub async fn get_advertised_tickets(&self) -> Result<Vec<TicketDto>, ClientError> {
        self.get_list("/advertised-tickets", Auth::Public).await
    }

    pub async fn get_ticket(&self, id: &str) -> Result<TicketDto, ClientError> {
        self.get(&ticket_path(id), Auth::Public).await
    }

    /// Every ticket regardless of review status, for the admin review table.
    pub async fn get_all_tickets(&self) -> Result<Vec<TicketDto>, ClientError> {
        self.get_list("/all-tickets", Auth::Required).await
    }

    /// Approved tickets eligible for advertisement.
    pub async fn get_approved_tickets(&self) -> Result<Vec<TicketDto>, ClientError> {
        self.get_list("/approved-tickets", Auth::Required).await
    }

    /// The signed in seller's own tickets.
    pub async fn get_inventory(&self) -> Result<Vec<TicketDto>, ClientError> {
        self.get_list("/my-inventory", Auth::Required).await
    }

    pub async fn create_ticket(&self, ticket: &NewTicketDto) -> Result<MutationResultDto, ClientError> {
        self.mutate(Method::Post, "/tickets", Some(ticket)).await
    }

    pub async fn update_ticket(
        &self,
        id: &str,
        patch: &TicketPatchDto,
    ) -> Result<MutationResultDto, ClientError> {
        self.mutate(Method::Patch, &ticket_path(id), Some(patch)).await
    }

    pub async fn delete_ticket(&self, id: &str) -> Result<MutationResultDto, ClientError> {
        self.mutate::<()>(Method::Delete, &ticket_path(id), None).await
    }
}
