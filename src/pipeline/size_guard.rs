//! 输出体积守卫
//!
//! 编码完成后校验输出体积；超限结果整体拒绝并丢弃，
//! 绝不把违反上限的文件交给调用方，也不落盘部分输出。

use crate::error::{RemasterError, RemasterResult};
use crate::tools::constants::limits::MAX_OUTPUT_SIZE;

/// 校验输出字节是否在体积上限内
pub fn check(bytes: &[u8]) -> RemasterResult<()> {
    let actual = bytes.len() as u64;
    if actual > MAX_OUTPUT_SIZE {
        return Err(RemasterError::OutputTooLarge {
            actual,
            limit: MAX_OUTPUT_SIZE,
        });
    }
    Ok(())
}
