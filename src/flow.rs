#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FlowRecord {
    /// Layer 4 ports
    #[prost(uint32, tag="1")]
    pub l4_src_port: u32,
    #[prost(uint32, tag="2")]
    pub l4_dst_port: u32,
    /// Layer 3 protocol
    #[prost(uint32, tag="3")]
    pub protocol: u32,
    /// Layer 7 protocol
    #[prost(uint32, tag="4")]
    pub l7_protocol: u32,
    /// In/out sizes of packets
    #[prost(uint64, tag="5")]
    pub in_bytes: u64,
    #[prost(uint64, tag="6")]
    pub out_bytes: u64,
    #[prost(uint64, tag="7")]
    pub in_packets: u64,
    #[prost(uint64, tag="8")]
    pub out_packets: u64,
    /// TCP flags
    #[prost(uint32, tag="9")]
    pub tcp_flags: u32,
    /// Duration
    #[prost(uint64, tag="10")]
    pub flow_duration_ms: u64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FlowRecordBatch {
    #[prost(message, repeated, tag="1")]
    pub records: ::prost::alloc::vec::Vec<FlowRecord>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Verdict {
    #[prost(bool, tag="1")]
    pub malicious: bool,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VerdictBatch {
    #[prost(message, repeated, tag="1")]
    pub verdicts: ::prost::alloc::vec::Vec<Verdict>,
}
/// Generated client implementations.
pub mod flow_classifier_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::*;
    use tonic::codegen::http::Uri;
    #[derive(Debug, Clone)]
    pub struct FlowClassifierClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl FlowClassifierClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: std::convert::TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> FlowClassifierClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> FlowClassifierClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<
                http::Request<tonic::body::BoxBody>,
                Response = http::Response<
                    <T as tonic::client::GrpcService<tonic::body::BoxBody>>::ResponseBody,
                >,
            >,
            <T as tonic::codegen::Service<
                http::Request<tonic::body::BoxBody>,
            >>::Error: Into<StdError> + Send + Sync,
        {
            FlowClassifierClient::new(InterceptedService::new(inner, interceptor))
        }
        /// Compress requests with the given encoding.
        ///
        /// This requires the server to support it otherwise it might respond with an
        /// error.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.send_compressed(encoding);
            self
        }
        /// Enable decompressing responses.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.accept_compressed(encoding);
            self
        }
        pub async fn classify(
            &mut self,
            request: impl tonic::IntoRequest<super::FlowRecord>,
        ) -> Result<tonic::Response<super::Verdict>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/flow.FlowClassifier/Classify",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn classify_batch(
            &mut self,
            request: impl tonic::IntoRequest<super::FlowRecordBatch>,
        ) -> Result<tonic::Response<super::VerdictBatch>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/flow.FlowClassifier/ClassifyBatch",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn classify_streaming(
            &mut self,
            request: impl tonic::IntoStreamingRequest<Message = super::FlowRecord>,
        ) -> Result<
            tonic::Response<tonic::codec::Streaming<super::Verdict>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/flow.FlowClassifier/ClassifyStreaming",
            );
            self.inner.streaming(request.into_streaming_request(), path, codec).await
        }
    }
}
/// Generated server implementations.
pub mod flow_classifier_server {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::*;
    ///Generated trait containing gRPC methods that should be implemented for use with FlowClassifierServer.
    #[async_trait]
    pub trait FlowClassifier: Send + Sync + 'static {
        async fn classify(
            &self,
            request: tonic::Request<super::FlowRecord>,
        ) -> Result<tonic::Response<super::Verdict>, tonic::Status>;
        async fn classify_batch(
            &self,
            request: tonic::Request<super::FlowRecordBatch>,
        ) -> Result<tonic::Response<super::VerdictBatch>, tonic::Status>;
        ///Server streaming response type for the ClassifyStreaming method.
        type ClassifyStreamingStream: futures_core::Stream<
                Item = Result<super::Verdict, tonic::Status>,
            >
            + Send
            + 'static;
        async fn classify_streaming(
            &self,
            request: tonic::Request<tonic::Streaming<super::FlowRecord>>,
        ) -> Result<tonic::Response<Self::ClassifyStreamingStream>, tonic::Status>;
    }
    #[derive(Debug)]
    pub struct FlowClassifierServer<T: FlowClassifier> {
        inner: _Inner<T>,
        accept_compression_encodings: EnabledCompressionEncodings,
        send_compression_encodings: EnabledCompressionEncodings,
    }
    struct _Inner<T>(Arc<T>);
    impl<T: FlowClassifier> FlowClassifierServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }
        pub fn from_arc(inner: Arc<T>) -> Self {
            let inner = _Inner(inner);
            Self {
                inner,
                accept_compression_encodings: Default::default(),
                send_compression_encodings: Default::default(),
            }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> InterceptedService<Self, F>
        where
            F: tonic::service::Interceptor,
        {
            InterceptedService::new(Self::new(inner), interceptor)
        }
        /// Enable decompressing requests with the given encoding.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.accept_compression_encodings.enable(encoding);
            self
        }
        /// Compress responses with the given encoding, if the client supports it.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.send_compression_encodings.enable(encoding);
            self
        }
    }
    impl<T, B> tonic::codegen::Service<http::Request<B>> for FlowClassifierServer<T>
    where
        T: FlowClassifier,
        B: Body + Send + 'static,
        B::Error: Into<StdError> + Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(
            &mut self,
            _cx: &mut Context<'_>,
        ) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/flow.FlowClassifier/Classify" => {
                    #[allow(non_camel_case_types)]
                    struct ClassifySvc<T: FlowClassifier>(pub Arc<T>);
                    impl<T: FlowClassifier> tonic::server::UnaryService<super::FlowRecord>
                    for ClassifySvc<T> {
                        type Response = super::Verdict;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::FlowRecord>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).classify(request).await };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = ClassifySvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/flow.FlowClassifier/ClassifyBatch" => {
                    #[allow(non_camel_case_types)]
                    struct ClassifyBatchSvc<T: FlowClassifier>(pub Arc<T>);
                    impl<
                        T: FlowClassifier,
                    > tonic::server::UnaryService<super::FlowRecordBatch>
                    for ClassifyBatchSvc<T> {
                        type Response = super::VerdictBatch;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::FlowRecordBatch>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).classify_batch(request).await };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = ClassifyBatchSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/flow.FlowClassifier/ClassifyStreaming" => {
                    #[allow(non_camel_case_types)]
                    struct ClassifyStreamingSvc<T: FlowClassifier>(pub Arc<T>);
                    impl<
                        T: FlowClassifier,
                    > tonic::server::StreamingService<super::FlowRecord>
                    for ClassifyStreamingSvc<T> {
                        type Response = super::Verdict;
                        type ResponseStream = T::ClassifyStreamingStream;
                        type Future = BoxFuture<
                            tonic::Response<Self::ResponseStream>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<tonic::Streaming<super::FlowRecord>>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move {
                                (*inner).classify_streaming(request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = ClassifyStreamingSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            );
                        let res = grpc.streaming(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => {
                    Box::pin(async move {
                        Ok(
                            http::Response::builder()
                                .status(200)
                                .header("grpc-status", "12")
                                .header("content-type", "application/grpc")
                                .body(empty_body())
                                .unwrap(),
                        )
                    })
                }
            }
        }
    }
    impl<T: FlowClassifier> Clone for FlowClassifierServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self {
                inner,
                accept_compression_encodings: self.accept_compression_encodings,
                send_compression_encodings: self.send_compression_encodings,
            }
        }
    }
    impl<T: FlowClassifier> Clone for _Inner<T> {
        fn clone(&self) -> Self {
            Self(self.0.clone())
        }
    }
    impl<T: std::fmt::Debug> std::fmt::Debug for _Inner<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }
    impl<T: FlowClassifier> tonic::server::NamedService for FlowClassifierServer<T> {
        const NAME: &'static str = "flow.FlowClassifier";
    }
}
