mod coprocessor;
mod i_type;
mod j_type;
mod load_store;
mod r_type;
