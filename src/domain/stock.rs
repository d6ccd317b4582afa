// ==========================================
// 商品调货建议系统 - 库存领域模型
// ==========================================
// 依据: 调货规则说明 - 数据口径
// 红线: 领域层不含文件解析逻辑,不含匹配逻辑
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// RpType - 补货类型 (Replenishment Type)
// ==========================================
// ND = 不再补货(清仓), RF = 正常补货
// 其余取值原样保留,不参与匹配
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RpType {
    Nd,
    Rf,
    Other(String),
}

impl RpType {
    /// 从源字段解析（大小写敏感,与源系统一致）
    pub fn parse(value: &str) -> Self {
        match value {
            "ND" => RpType::Nd,
            "RF" => RpType::Rf,
            other => RpType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for RpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpType::Nd => write!(f, "ND"),
            RpType::Rf => write!(f, "RF"),
            RpType::Other(s) => write!(f, "{}", s),
        }
    }
}

// ==========================================
// StockRecord - 单店库存记录
// ==========================================
// 一行对应一个 (Article, Site) 组合
// 用途: 导入层写入,引擎层只读
// 整数字段经标准化后保证落在 [0, 100000]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockRecord {
    // ===== 分组键 =====
    pub article: String, // 商品编码（12位,前补零）
    pub om: String,      // 区域/负责人键（OM）

    // ===== 站点信息 =====
    pub site: String,       // 店铺编码
    pub rp_type: RpType,    // 补货类型
    pub product_desc: String, // 商品描述（可选列,缺省为空）

    // ===== 库存数量 =====
    pub net_stock: i64,        // 净库存
    pub pending_received: i64, // 在途已发未收
    pub safety_stock: i64,     // 安全库存目标

    // ===== 销量口径 =====
    pub last_month_sold: i64, // 上月销量
    pub mtd_sold: i64,        // 本月至今销量
}

impl StockRecord {
    /// 有效销量: 上月销量 > 0 取上月,否则取本月至今
    pub fn effective_sold_qty(&self) -> i64 {
        if self.last_month_sold > 0 {
            self.last_month_sold
        } else {
            self.mtd_sold
        }
    }

    /// 可用数量 = 净库存 + 在途（在途不参与匹配扣减）
    pub fn available_qty(&self, net_stock: i64) -> i64 {
        net_stock + self.pending_received
    }

    /// 过剩数量 = max(可用 - 安全库存, 0)
    pub fn excess_qty(&self, net_stock: i64) -> i64 {
        (self.available_qty(net_stock) - self.safety_stock).max(0)
    }

    /// 缺口数量 = max(安全库存 - 可用, 0)
    pub fn needed_qty(&self, net_stock: i64) -> i64 {
        (self.safety_stock - self.available_qty(net_stock)).max(0)
    }
}
