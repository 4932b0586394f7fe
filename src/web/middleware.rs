use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
};
use futures_util::future::{Ready, ok};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use blockpress::carousel::DEFAULT_MEDIA_HOST;

const FONT_CDN: &str = "https://cdnjs.cloudflare.com";

const STATIC_HEADERS: &[(&str, &str)] = &[
    // Prevent clickjacking
    ("x-frame-options", "DENY"),
    // Prevent MIME sniffing
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
];

/// CSP allowing the feature videos, their posters and the icon font.
pub fn content_security_policy(media_host: &str) -> String {
    let media_origin = format!(
        "https://{}",
        media_host.split('/').next().unwrap_or(media_host)
    );

    format!(
        "default-src 'self'; script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval'; \
         style-src 'self' 'unsafe-inline' {font}; font-src 'self' {font}; \
         img-src 'self' data: {media}; media-src 'self' {media}; \
         connect-src 'self' ws:; frame-ancestors 'none'",
        font = FONT_CDN,
        media = media_origin,
    )
}

/// Security headers middleware
pub struct SecurityHeaders;

impl<S, B> Transform<S, ServiceRequest> for SecurityHeaders
where
    S: Service<
            ServiceRequest,
            Response = ServiceResponse<B>,
            Error = Error,
        >,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SecurityHeadersMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        let csp = content_security_policy(DEFAULT_MEDIA_HOST);
        let csp = HeaderValue::from_str(&csp).unwrap_or_else(|e| {
            log::error!("Invalid content security policy: {}", e);
            HeaderValue::from_static("default-src 'self'")
        });

        ok(SecurityHeadersMiddleware {
            service,
            csp: Rc::new(csp),
        })
    }
}

pub struct SecurityHeadersMiddleware<S> {
    service: S,
    csp: Rc<HeaderValue>,
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersMiddleware<S>
where
    S: Service<
            ServiceRequest,
            Response = ServiceResponse<B>,
            Error = Error,
        >,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<
        Box<dyn Future<Output = Result<Self::Response, Self::Error>>>,
    >;

    fn poll_ready(
        &self,
        cx: &mut Context<'_>,
    ) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);
        let csp = Rc::clone(&self.csp);

        Box::pin(async move {
            let mut res = fut.await?;
            let headers = res.headers_mut();

            for (name, value) in STATIC_HEADERS {
                headers.insert(
                    HeaderName::from_static(*name),
                    HeaderValue::from_static(*value),
                );
            }
            headers.insert(
                HeaderName::from_static("content-security-policy"),
                (*csp).clone(),
            );

            Ok(res)
        })
    }
}
