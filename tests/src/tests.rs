mod autoscale;
mod diag;
mod expr;
mod manager;
mod solve;
