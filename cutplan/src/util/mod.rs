/// Set of functions used to assure the correctness of the library's state.
pub mod assertions;
