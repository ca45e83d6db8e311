mod order;
mod payment;
mod retry;
mod statistics;
mod ticket;
mod user;
