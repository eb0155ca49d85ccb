//! Black-box tests for keygate live under `tests/`; they use only the public
//! facade, the way a request handler would.
