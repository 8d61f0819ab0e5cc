mod executor;
mod selection;
