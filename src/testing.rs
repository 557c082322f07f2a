//! Helpers shared by the async tests: a throwaway local HTTP server standing in for
//! station pages and the search API, plus canned markup.

use axum::Router;

use crate::config::ExtractorKind;
use crate::station::Station;

/// Serve `router` on an ephemeral localhost port and return its base URL.
pub(crate) async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("test listener address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    format!("http://{addr}")
}

pub(crate) fn station(id: &str, page_url: String, extractor: ExtractorKind) -> Station {
    Station {
        id: id.to_string(),
        name: id.to_uppercase(),
        color: "#123456".to_string(),
        page_url,
        extractor,
        use_relay: false,
    }
}

/// A "recently played" page laid out as `<h2>Artist</h2><p>Title</p>` blocks, mixed
/// with programme blocks and site chrome.
pub(crate) const HEADING_PAGE: &str = r#"<!doctype html>
<html>
<head><title>Gedraaid</title></head>
<body>
  <nav>
    <h2>Meld je aan voor de nieuwsbrief</h2>
    <p>Ontvang als eerste updates</p>
  </nav>
  <main>
    <div class="item">
      <span>15:04</span>
      <h2>Queens Of The Stone Age</h2>
      <p>The Lost Art of Keeping a Secret</p>
    </div>
    <div class="item">
      <h2>Stefan Koren</h2>
      <p>15:00 - 18:00</p>
    </div>
    <div class="item">
      <span>14:58</span>
      <h2>  Arctic Monkeys </h2>
      <p> Do I Wanna Know? </p>
    </div>
    <div class="item">
      <span>live</span>
      <h2>Pixies</h2>
      <div><a href="/artist/pixies">Where Is My Mind?</a></div>
    </div>
    <div class="item"><h2>Heading Without Title</h2></div>
    <div class="item"><h2></h2><p>Title Without Artist</p></div>
  </main>
  <footer>
    <h2>Contact</h2>
    <p>info@example.nl</p>
    <h2>NaamTelefoonnummer</h2>
    <p>E-mail</p>
  </footer>
</body>
</html>"#;

/// A playlist page whose entries are `Artist - Title` links to track pages.
pub(crate) const LINK_PAGE: &str = r#"<!doctype html>
<html>
<body>
  <a href="/nl/sublime/">Sublime - home</a>
  <table class="tablelist-schedule">
    <tr><td>16:02</td><td><a href="/nl/sublime/track/123/">Jungle - Back On 74</a></td></tr>
    <tr><td>15:58</td><td><a href="/track/456/">Crosby, Stills &amp; Nash - Suite: Judy Blue Eyes - Live</a></td></tr>
    <tr><td>15:55</td><td><a href="/track/789/">NoSeparatorHere</a></td></tr>
    <tr><td>15:51</td><td><a href="/track/000/"> - Missing artist</a></td></tr>
    <tr><td>15:47</td><td><a href="/track/321/">  Khruangbin  -  Time (You and I)  </a></td></tr>
  </table>
</body>
</html>"#;
