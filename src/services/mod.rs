pub mod session;
pub mod spotify;

pub use session::SessionCookies;
pub use spotify::SpotifyClient;
