use std::time::Duration;

use actix_rt::time::delay_for;

use super::{Notify, Progress, Reload};

/// Pause between a successful refresh and the view reload.
const RELOAD_DELAY: Duration = Duration::from_millis(1000);

/// What one refresh invocation came to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

/// Ask the server to re-fetch its board, then reload the view.
///
/// Brackets the request with `progress` and reports the result through
/// `notify`. On success, `reload` is triggered exactly once, 1000 ms after
/// the response; nothing can cancel it in between. On failure the view is
/// left untouched. Invocations are not deduplicated: calling this again
/// while a request is in flight issues a second, independent request.
pub async fn run(
    http: &reqwest::Client,
    server: &str,
    progress: &dyn Progress,
    notify: &dyn Notify,
    reload: &dyn Reload,
) -> Outcome {
    progress.start();

    let url = format!("{}/refresh", server.trim_end_matches('/'));
    let result = http
        .get(&url)
        .send()
        .await
        .and_then(|resp| resp.error_for_status());

    match result {
        Ok(_) => {
            progress.done();
            notify.success("刷新成功！");

            delay_for(RELOAD_DELAY).await;
            reload.reload().await;

            Outcome::Succeeded
        }
        Err(e) => {
            progress.done();
            notify.failure(&format!("请求失败: {}", e));

            Outcome::Failed
        }
    }
}


#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Instant;

    use actix_web::{test, web, App, HttpResponse};
    use futures::future::LocalBoxFuture;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        ProgressStart,
        ProgressDone,
        Success(String),
        Failure(String),
        Reload,
    }

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<(Event, Instant)>>,
    }

    impl Recorder {
        fn push(&self, event: Event) {
            self.events.borrow_mut().push((event, Instant::now()));
        }

        fn events(&self) -> Vec<Event> {
            self.events.borrow().iter().map(|(e, _)| e.clone()).collect()
        }

        fn time_of(&self, needle: &Event) -> Instant {
            self.events
                .borrow()
                .iter()
                .find(|(e, _)| e == needle)
                .map(|(_, at)| *at)
                .expect("event not recorded")
        }

        fn count(&self, needle: &Event) -> usize {
            self.events.borrow().iter().filter(|(e, _)| e == needle).count()
        }
    }

    impl Progress for Recorder {
        fn start(&self) {
            self.push(Event::ProgressStart);
        }

        fn done(&self) {
            self.push(Event::ProgressDone);
        }
    }

    impl Notify for Recorder {
        fn success(&self, message: &str) {
            self.push(Event::Success(message.to_owned()));
        }

        fn failure(&self, message: &str) {
            self.push(Event::Failure(message.to_owned()));
        }
    }

    impl Reload for Recorder {
        fn reload(&self) -> LocalBoxFuture<'_, ()> {
            Box::pin(async move {
                self.push(Event::Reload);
            })
        }
    }

    fn ok_server() -> test::TestServer {
        test::start(|| {
            App::new().route(
                "/refresh",
                web::get().to(|| async {
                    HttpResponse::Ok().json(serde_json::json!({ "status": 200, "msg": "ok" }))
                }),
            )
        })
    }

    #[actix_rt::test]
    async fn success_notifies_then_reloads_after_the_delay() {
        let srv = ok_server();
        let rec = Recorder::default();

        let outcome = run(&reqwest::Client::new(), &srv.url("/"), &rec, &rec, &rec).await;

        assert_eq!(outcome, Outcome::Succeeded);
        assert_eq!(
            rec.events(),
            vec![
                Event::ProgressStart,
                Event::ProgressDone,
                Event::Success("刷新成功！".to_owned()),
                Event::Reload,
            ]
        );

        let notified = rec.time_of(&Event::Success("刷新成功！".to_owned()));
        let reloaded = rec.time_of(&Event::Reload);
        assert!(reloaded.duration_since(notified) >= RELOAD_DELAY);
    }

    #[actix_rt::test]
    async fn success_message_ignores_the_response_payload() {
        let srv = test::start(|| {
            App::new().route(
                "/refresh",
                web::get().to(|| async { HttpResponse::Ok().body("anything but json") }),
            )
        });
        let rec = Recorder::default();

        run(&reqwest::Client::new(), &srv.url("/"), &rec, &rec, &rec).await;

        assert_eq!(rec.count(&Event::Success("刷新成功！".to_owned())), 1);
    }

    #[actix_rt::test]
    async fn server_error_notifies_and_never_reloads() {
        let srv = test::start(|| {
            App::new().route(
                "/refresh",
                web::get().to(|| async { HttpResponse::InternalServerError().body("boom") }),
            )
        });
        let rec = Recorder::default();

        let outcome = run(&reqwest::Client::new(), &srv.url("/"), &rec, &rec, &rec).await;

        assert_eq!(outcome, Outcome::Failed);

        let events = rec.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], Event::ProgressStart);
        assert_eq!(events[1], Event::ProgressDone);
        match &events[2] {
            Event::Failure(msg) => {
                assert!(msg.starts_with("请求失败: "));
                assert!(msg.contains("500"));
            }
            other => panic!("expected a failure notification, got {:?}", other),
        }
        assert_eq!(rec.count(&Event::Reload), 0);
    }

    #[actix_rt::test]
    async fn transport_error_notifies_and_never_reloads() {
        let rec = Recorder::default();

        let outcome = run(
            &reqwest::Client::new(),
            "http://127.0.0.1:1",
            &rec,
            &rec,
            &rec,
        )
        .await;

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(rec.count(&Event::ProgressDone), 1);
        assert_eq!(rec.count(&Event::Reload), 0);
        match &rec.events()[2] {
            Event::Failure(msg) => assert!(msg.starts_with("请求失败: ")),
            other => panic!("expected a failure notification, got {:?}", other),
        }
    }

    // Pins the absence of in-flight deduplication: a second invocation
    // issues its own request instead of piggybacking on the first.
    #[actix_rt::test]
    async fn concurrent_invocations_each_hit_the_server() {
        let hits = Arc::new(AtomicUsize::new(0));
        let srv = {
            let hits = hits.clone();
            test::start(move || {
                App::new()
                    .data(hits.clone())
                    .route("/refresh", web::get().to(count_hit))
            })
        };

        let http = reqwest::Client::new();
        let first = Recorder::default();
        let second = Recorder::default();

        let url = srv.url("/");
        let outcomes = futures::join!(
            run(&http, &url, &first, &first, &first),
            run(&http, &url, &second, &second, &second),
        );

        assert_eq!(outcomes, (Outcome::Succeeded, Outcome::Succeeded));
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(first.count(&Event::Reload), 1);
        assert_eq!(second.count(&Event::Reload), 1);
    }

    async fn count_hit(hits: web::Data<Arc<AtomicUsize>>) -> HttpResponse {
        hits.fetch_add(1, Ordering::SeqCst);
        HttpResponse::Ok().body("ok")
    }
}
