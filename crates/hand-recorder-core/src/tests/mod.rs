mod session;
mod support;
