mod health;
mod tracing_headers;
