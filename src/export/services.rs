//! RPC service and method enumeration.

use super::handle::SchemaHandle;
use super::records::{Header, MethodInfo, RpcTypeInfo, ServiceInfo, position, span};
use crate::base::{IStr, Position, Span, StringPool};
use crate::schema::{RpcMethod, RpcType, Schema, ServiceDef};

#[derive(Debug)]
pub(super) struct RenderedService {
    header: Header,
    methods: Vec<RenderedMethod>,
}

#[derive(Debug)]
struct RenderedMethod {
    name: IStr,
    doc: IStr,
    position: Position,
    request: RenderedRpcType,
    response: RenderedRpcType,
    streaming: Option<IStr>,
}

#[derive(Debug)]
struct RenderedRpcType {
    name: IStr,
    span: Span,
    source: IStr,
}

impl RenderedService {
    pub(super) fn render(schema: &Schema, def: &ServiceDef, pool: &mut StringPool) -> Self {
        Self {
            header: Header::render(pool, &def.name, &def.namespace, &def.file, &def.doc, def.loc),
            methods: def
                .methods
                .iter()
                .map(|method| RenderedMethod::render(schema, method, pool))
                .collect(),
        }
    }

    fn info(&self) -> ServiceInfo<'_> {
        ServiceInfo {
            name: &self.header.name,
            qualified_name: &self.header.qualified_name,
            namespace: self.header.namespace(),
            file: &self.header.file,
            doc: &self.header.doc,
            position: self.header.position,
            method_count: self.methods.len(),
        }
    }
}

impl RenderedMethod {
    fn render(schema: &Schema, def: &RpcMethod, pool: &mut StringPool) -> Self {
        Self {
            name: pool.intern(&def.name),
            doc: pool.intern_doc(&def.doc),
            position: position(def.loc),
            request: RenderedRpcType::render(schema, &def.request, pool),
            response: RenderedRpcType::render(schema, &def.response, pool),
            streaming: def.streaming().map(|mode| pool.intern(mode)),
        }
    }

    fn info<'a>(&'a self, owner: &'a Header) -> MethodInfo<'a> {
        MethodInfo {
            name: &self.name,
            namespace: owner.namespace(),
            file: &owner.file,
            doc: &self.doc,
            position: self.position,
            request: self.request.info(),
            response: self.response.info(),
            streaming: self.streaming.as_deref(),
        }
    }
}

impl RenderedRpcType {
    fn render(schema: &Schema, def: &RpcType, pool: &mut StringPool) -> Self {
        let name = schema
            .struct_def(def.ty)
            .map_or_else(|| def.source.to_string(), |table| table.qualified_name());
        Self {
            name: pool.intern_string(name),
            span: span(def.span),
            source: pool.intern(&def.source),
        }
    }

    fn info(&self) -> RpcTypeInfo<'_> {
        RpcTypeInfo {
            name: &self.name,
            span: self.span,
            source: &self.source,
        }
    }
}

impl SchemaHandle {
    pub fn service_count(&self) -> usize {
        self.exports().services.len()
    }

    /// The service at `index`, or the empty sentinel when out of range
    pub fn get_service(&self, index: usize) -> ServiceInfo<'_> {
        self.service_info(index).unwrap_or_default()
    }

    pub fn service_info(&self, index: usize) -> Option<ServiceInfo<'_>> {
        self.exports().services.get(index).map(RenderedService::info)
    }

    /// Number of methods of a service; 0 when `service_index` is out of range
    pub fn method_count(&self, service_index: usize) -> usize {
        self.exports()
            .services
            .get(service_index)
            .map_or(0, |s| s.methods.len())
    }

    pub fn get_method(&self, service_index: usize, index: usize) -> MethodInfo<'_> {
        self.method_info(service_index, index).unwrap_or_default()
    }

    pub fn method_info(&self, service_index: usize, index: usize) -> Option<MethodInfo<'_>> {
        let service = self.exports().services.get(service_index)?;
        service
            .methods
            .get(index)
            .map(|method| method.info(&service.header))
    }
}

#[cfg(test)]
mod tests {
    use crate::base::Span;
    use crate::export::SchemaHandle;
    use crate::schema::ParseOptions;

    #[test]
    fn test_method_types_carry_their_own_ranges() {
        let text = "namespace rpc;\ntable Req {}\ntable Resp {}\nrpc_service Greeter {\n  /// Say hi\n  Hello(Req):rpc.Resp (streaming: \"server\");\n}";
        let handle = SchemaHandle::parse(text, &ParseOptions::default());
        assert!(handle.is_success(), "{}", handle.error());

        let service = handle.get_service(0);
        assert_eq!(service.qualified_name, "rpc.Greeter");
        assert_eq!(service.method_count, 1);

        let hello = handle.get_method(0, 0);
        assert_eq!(hello.name, "Hello");
        assert_eq!(hello.doc, " Say hi");
        assert_eq!((hello.position.line, hello.position.column), (5, 2));
        assert_eq!(hello.request.name, "rpc.Req");
        assert_eq!(hello.request.source, "Req");
        assert_eq!(hello.request.span, Span::from_coords(5, 8, 5, 11));
        assert_eq!(hello.response.name, "rpc.Resp");
        assert_eq!(hello.response.source, "rpc.Resp");
        assert_eq!(hello.streaming, Some("server"));
    }

    #[test]
    fn test_out_of_range_methods() {
        let handle = SchemaHandle::parse("", &ParseOptions::default());
        assert!(handle.is_success());
        assert_eq!(handle.service_count(), 0);
        assert_eq!(handle.method_count(0), 0);
        assert_eq!(handle.get_method(0, 0), Default::default());
        assert_eq!(handle.get_service(0), Default::default());
    }
}
