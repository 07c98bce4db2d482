mod register;
mod token_middleware;
