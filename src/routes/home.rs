//! Landing page and static asset stubs.
//!
//! The page is a single self-contained HTML document: a sign picker and a
//! script that posts to the horoscope endpoint. No templating engine is
//! warranted for one static page.

use axum::{
    http::StatusCode,
    response::Html,
};

/// Inline landing page markup.
const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Stargazer</title>
    <style>
        body { font-family: sans-serif; max-width: 40rem; margin: 3rem auto; padding: 0 1rem; }
        select, button { font-size: 1rem; padding: 0.4rem; }
        #result { margin-top: 1.5rem; white-space: pre-wrap; }
    </style>
</head>
<body>
    <h1>✨ Stargazer</h1>
    <p>Pick your sign and get today's horoscope.</p>
    <select id="sign">
        <option>aries</option><option>taurus</option><option>gemini</option>
        <option>cancer</option><option>leo</option><option>virgo</option>
        <option>libra</option><option>scorpio</option><option>sagittarius</option>
        <option>capricorn</option><option>aquarius</option><option>pisces</option>
    </select>
    <button id="go">Reveal</button>
    <div id="result"></div>
    <script>
        document.getElementById('go').addEventListener('click', async () => {
            const sign = document.getElementById('sign').value;
            const res = await fetch('/get_horoscope', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ zodiac_sign: sign }),
            });
            const data = await res.json();
            document.getElementById('result').textContent = data.success
                ? `${data.zodiac_sign}\n\n${data.horoscope}\n\nLucky number: ${data.lucky_number}\nLucky color: ${data.lucky_color}\nMood: ${data.mood}`
                : data.error;
        });
    </script>
</body>
</html>"#;

/// Landing page handler.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Favicon handler.
///
/// No icon asset is shipped; answer with an empty success instead of a 404
/// so browser chrome requests stay out of the error logs.
pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}
