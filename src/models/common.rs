//
//  clumio-sdk
//  models/common.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! HATEOAS links and task envelopes shared by several resources.

clumio_model! {
    /// A HATEOAS link.
    ///
    /// `href` is the only field Clumio always sends, so it is strict.
    pub struct HateoasLink {
        /// Target URI, possibly templated.
        pub href: String => "href",
        /// Whether `href` contains `{param}` placeholders.
        pub templated: Option<bool> => "templated",
        /// HTTP method of the linked action (`GET`, `PUT`, ...).
        pub method: Option<String> => "type",
    }
}

clumio_model! {
    /// Pagination links of a list response.
    pub struct PageLinks {
        pub first: Option<HateoasLink> => "_first",
        pub last: Option<HateoasLink> => "_last",
        pub next: Option<HateoasLink> => "_next",
        pub prev: Option<HateoasLink> => "_prev",
        pub self_link: Option<HateoasLink> => "_self",
    }
}

clumio_model! {
    /// Links to the task started by an accepted (202) request.
    pub struct TaskLinks {
        pub self_link: Option<HateoasLink> => "_self",
        pub read_task: Option<HateoasLink> => "read-task",
        pub update_task: Option<HateoasLink> => "update-task",
    }
}

clumio_model! {
    /// Body of a request that was accepted and continues as a task.
    pub struct AsyncTaskResponse {
        pub links: Option<TaskLinks> => "_links",
        /// Poll this task with [`Tasks::read`](crate::controllers::Tasks::read).
        pub task_id: Option<String> => "task_id",
    }
}

clumio_model! {
    /// Body of operations that return no payload.
    pub struct EmptyResponse {}
}
