//! Tickets view and per-customer ticket summary

use access_filter::{AccessFilter, Capabilities, Facet, FacetSelector, Refinement};
use itsm_model::{Actor, Ticket, TicketState};
use serde::Serialize;

use crate::config::ConsoleConfig;

#[derive(Debug, Clone, Default)]
pub struct TicketQuery {
    pub search: String,
    pub status: FacetSelector,
    pub priority: FacetSelector,
}

impl TicketQuery {
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self {
            search: config.search.clone(),
            status: config.ticket_status.clone(),
            priority: config.ticket_priority.clone(),
        }
    }

    fn refinement(&self) -> Refinement {
        Refinement::new()
            .search(&self.search)
            .facet(Facet::Status, self.status.clone())
            .facet(Facet::Priority, self.priority.clone())
    }
}

#[derive(Debug, Serialize)]
pub struct TicketRow<'a> {
    pub ticket: &'a Ticket,
    pub can_update: bool,
}

#[derive(Debug, Serialize)]
pub struct TicketView<'a> {
    pub rows: Vec<TicketRow<'a>>,
    pub count: usize,
}

/// Tickets visible to `actor`, narrowed by `query`
pub fn ticket_view<'a>(actor: &Actor, tickets: &'a [Ticket], query: &TicketQuery) -> TicketView<'a> {
    let visible = AccessFilter::new(actor).apply(tickets);
    let capabilities = Capabilities::for_actor(actor);

    let rows: Vec<_> = query
        .refinement()
        .apply(visible)
        .into_iter()
        .map(|ticket| TicketRow {
            ticket,
            can_update: capabilities.can_update_ticket(ticket),
        })
        .collect();

    TicketView {
        count: rows.len(),
        rows,
    }
}

/// Ticket counts for one customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerTicketSummary {
    pub customer_id: String,
    pub customer_name: String,
    pub ticket_count: usize,
    /// Open or in progress
    pub open_tickets: usize,
    pub overdue_tickets: usize,
}

/// Summaries in order of each customer's first ticket
pub fn customer_summaries<'a, I>(tickets: I) -> Vec<CustomerTicketSummary>
where
    I: IntoIterator<Item = &'a Ticket>,
{
    let mut summaries: Vec<CustomerTicketSummary> = Vec::new();

    for ticket in tickets {
        let index = match summaries
            .iter()
            .position(|summary| summary.customer_id == ticket.customer_id)
        {
            Some(index) => index,
            None => {
                summaries.push(CustomerTicketSummary {
                    customer_id: ticket.customer_id.clone(),
                    customer_name: ticket.customer_name.clone(),
                    ticket_count: 0,
                    open_tickets: 0,
                    overdue_tickets: 0,
                });
                summaries.len() - 1
            }
        };

        let summary = &mut summaries[index];
        summary.ticket_count += 1;
        if ticket.status.is_open() {
            summary.open_tickets += 1;
        }
        if ticket.state == TicketState::Overdue {
            summary.overdue_tickets += 1;
        }
    }

    summaries
}
