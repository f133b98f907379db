//! Stargazer: an AI-powered horoscope web service.
//!
//! One endpoint does the real work: `POST /get_horoscope` validates the
//! requested zodiac sign, asks a chat-completion provider for a short
//! horoscope under a bounded timeout, and on any provider failure substitutes
//! a canned per-sign text, so a valid request always gets a successful
//! response. Three cosmetic extras (lucky number, color, mood) are sampled
//! independently per request.

pub mod config;
pub mod error;
pub mod horoscope;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod zodiac;
