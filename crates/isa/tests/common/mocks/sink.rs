use mockall::mock;
use nyuzi_mc_core::Result;
use nyuzi_mc_core::emit::EmissionSink;

mock! {
    pub Sink {}
    impl EmissionSink for Sink {
        fn emit(&mut self, assembly: &str, disassembly: &str) -> Result<()>;
    }
}
