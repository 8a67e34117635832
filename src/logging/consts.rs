pub const DEFAULT_DIRECTIVE: &str = "weather_greeter_server=info";
pub const DEFAULT_CLIENT_IP: &str = "127.0.0.1";
