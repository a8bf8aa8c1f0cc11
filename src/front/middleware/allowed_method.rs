//! Extractor rejecting requests sent with the wrong verb.
//!
//! Resources are registered for every method, so a handler takes
//! `AllowedMethod<Post>` (or `Get`, `Put`, `Delete`) as its first argument
//! and the request fails with [UserError::MethodNotAllowed] before anything
//! else is read.

use std::marker::PhantomData;

use ntex::{
    http::{Method, Payload},
    web::{Error, FromRequest, HttpRequest},
};

use crate::front::errors::UserError;

pub trait Verb {
    const METHOD: Method;
}

pub struct Get;
pub struct Post;
pub struct Put;
pub struct Delete;

impl Verb for Get {
    const METHOD: Method = Method::GET;
}

impl Verb for Post {
    const METHOD: Method = Method::POST;
}

impl Verb for Put {
    const METHOD: Method = Method::PUT;
}

impl Verb for Delete {
    const METHOD: Method = Method::DELETE;
}

pub struct AllowedMethod<V: Verb>(PhantomData<V>);

fn check_method<V: Verb>(method: &Method) -> Result<AllowedMethod<V>, Error> {
    if *method == V::METHOD {
        return Ok(AllowedMethod(PhantomData));
    }

    Err(UserError::MethodNotAllowed.into())
}

impl<Err, V: Verb> FromRequest<Err> for AllowedMethod<V> {
    type Error = Error;

    fn from_request(
        req: &HttpRequest,
        _: &mut Payload,
    ) -> impl std::future::Future<Output = Result<Self, Self::Error>> {
        std::future::ready(check_method::<V>(req.method()))
    }
}
