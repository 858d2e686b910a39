#![allow(clippy::too_many_arguments)]
//! Examples of populating fields of various order types
use crate::core::common::TagValue;
use crate::core::contract::OrderComboLeg;
use crate::core::order::Order;

/// An auction order is entered into the electronic trading system during the pre-market opening period for execution at the
/// Calculated Opening Price (COP). If your order is not filled on the open, the order is re-submitted as a limit order with
/// the limit price set to the COP or the best bid/ask after the market opens.
/// Products: FUT, STK
//==================================================================================================
pub fn at_auction(action: &str, quantity: i32, price: f64) -> Order {
    Order {
        action: action.to_string(),
        tif: "AUC".to_string(),
        order_type: "MTL".to_string(),
        total_quantity: quantity,
        lmt_price: price,
        ..Default::default()
    }
}

//==================================================================================================
/// A discretionary order is a limit order submitted with a hidden, specified 'discretionary' amount off the limit price which
/// may be used to increase the price range over which the limit order is eligible to execute. The market sees only the limit price.
/// Products: STK
pub fn discretionary(action: &str, quantity: i32, price: f64, discretionary_amount: f64) -> Order {
    Order {
        action: action.to_string(),
        order_type: "LMT".to_string(),
        total_quantity: quantity,
        lmt_price: price,
        discretionary_amt: discretionary_amount,
        ..Default::default()
    }
}

//==================================================================================================
/// A Market order is an order to buy or sell at the market bid or offer price. A market order may increase the likelihood of a fill
/// and the speed of execution, but unlike the Limit order a Market order provides no price protection and may fill at a price far
/// lower/higher than the current displayed bid/ask.
/// Products: BOND, CFD, EFP, CASH, FUND, FUT, FOP, OPT, STK, WAR
pub fn market_order(action: &str, quantity: i32) -> Order {
    Order {
        action: action.to_string(),
        order_type: "MKT".to_string(),
        total_quantity: quantity,
        ..Default::default()
    }
}

//==================================================================================================
/// A Market if Touched (MIT) is an order to buy (or sell) a contract below (or above) the market. Its purpose is to take advantage
/// of sudden or unexpected changes in share or other prices and provides investors with a trigger price to set an order in motion.
/// This order is held in the system until the trigger price is touched, and is then submitted as a market order.
/// Products: BOND, CFD, CASH, FUT, FOP, OPT, STK, WAR
pub fn market_if_touched(action: &str, quantity: i32, price: f64) -> Order {
    Order {
        action: action.to_string(),
        order_type: "MIT".to_string(),
        total_quantity: quantity,
        aux_price: price,
        ..Default::default()
    }
}

//==================================================================================================
/// A Market-on-Close (MOC) order is a market order that is submitted to execute as close to the closing price as possible.
/// Products: CFD, FUT, STK, WAR
pub fn market_on_close(action: &str, quantity: i32) -> Order {
    Order {
        action: action.to_string(),
        order_type: "MOC".to_string(),
        total_quantity: quantity,
        ..Default::default()
    }
}

//==================================================================================================
/// A Market-on-Open (MOO) order combines a market order with the OPG time in force to create an order that is automatically
/// submitted at the market's open and fills at the market price.
/// Products: CFD, STK, OPT, WAR
pub fn market_on_open(action: &str, quantity: i32) -> Order {
    Order {
        action: action.to_string(),
        order_type: "MKT".to_string(),
        total_quantity: quantity,
        tif: "OPG".to_string(),
        ..Default::default()
    }
}

//==================================================================================================
/// ISE Midpoint Match (MPM) orders always execute at the midpoint of the NBBO. You can submit market and limit orders direct-routed
/// to ISE for MPM execution. Standard MPM orders are completely anonymous.
/// Products: STK
pub fn midpoint_match(action: &str, quantity: i32) -> Order {
    Order {
        action: action.to_string(),
        order_type: "MKT".to_string(),
        total_quantity: quantity,
        ..Default::default()
    }
}

//==================================================================================================
/// A pegged-to-market order is designed to maintain a purchase price relative to the national best offer (NBO) or a sale price
/// relative to the national best bid (NBB).
/// Products: STK
pub fn pegged_to_market(action: &str, quantity: i32, market_offset: f64) -> Order {
    Order {
        action: action.to_string(),
        order_type: "PEG MKT".to_string(),
        total_quantity: quantity,
        aux_price: market_offset,
        ..Default::default()
    }
}

//==================================================================================================
/// A Pegged to Stock order continually adjusts the option order price by the product of a signed user-defined delta and the change
/// of the option's underlying stock price.
/// Products: OPT
pub fn pegged_to_stock(
    action: &str,
    quantity: i32,
    delta: f64,
    stock_reference_price: f64,
    starting_price: f64,
) -> Order {
    Order {
        action: action.to_string(),
        order_type: "PEG STK".to_string(),
        total_quantity: quantity,
        delta,
        stock_ref_price: stock_reference_price,
        starting_price,
        ..Default::default()
    }
}

/// Relative (a.k.a. Pegged-to-Primary) orders provide a means for traders to seek a more aggressive price than the National Best Bid
/// and Offer (NBBO) by placing more aggressive bids and offers than the current best bids and offers.
/// Products: CFD, STK, OPT, FUT
//==================================================================================================
pub fn relative_pegged_to_primary(
    action: &str,
    quantity: i32,
    price_cap: f64,
    offset_amount: f64,
) -> Order {
    Order {
        action: action.to_string(),
        order_type: "REL".to_string(),
        total_quantity: quantity,
        lmt_price: price_cap,
        aux_price: offset_amount,
        ..Default::default()
    }
}

/// Sweep-to-fill orders are useful when a trader values speed of execution over price.
/// Products: CFD, STK, WAR
//==================================================================================================
pub fn sweep_to_fill(action: &str, quantity: i32, price: f64) -> Order {
    Order {
        action: action.to_string(),
        order_type: "LMT".to_string(),
        total_quantity: quantity,
        lmt_price: price,
        sweep_to_fill: true,
        ..Default::default()
    }
}

/// The block attribute is used for large volume option orders on ISE that consist of at least 50 contracts.
/// Products: OPT
//==================================================================================================
pub fn block(action: &str, quantity: i32, price: f64) -> Order {
    Order {
        action: action.to_string(),
        order_type: "LMT".to_string(),
        total_quantity: quantity,
        lmt_price: price,
        block_order: true,
        ..Default::default()
    }
}

/// A Box Top order executes as a market order at the current best price. If the order is only partially filled, the remainder
/// is submitted as a limit order at the price at which the filled portion executed.
/// Products: OPT
/// Supported Exchanges: BOX
//==================================================================================================
pub fn box_top(action: &str, quantity: i32) -> Order {
    Order {
        action: action.to_string(),
        order_type: "BOX TOP".to_string(),
        total_quantity: quantity,
        ..Default::default()
    }
}

/// A Limit order is an order to buy or sell at a specified price or better.
/// Products: BOND, CFD, CASH, FUT, FOP, OPT, STK, WAR
//==================================================================================================
pub fn limit_order(action: &str, quantity: i32, limit_price: f64) -> Order {
    Order {
        action: action.to_string(),
        order_type: "LMT".to_string(),
        total_quantity: quantity,
        lmt_price: limit_price,
        transmit: true,
        ..Default::default()
    }
}

/// A Limit if Touched is an order to buy (or sell) a contract at a specified price or better, below (or above) the market. This
/// order is held in the system until the trigger price is touched.
/// Products: BOND, CFD, CASH, FUT, FOP, OPT, STK, WAR
//==================================================================================================
pub fn limit_if_touched(action: &str, quantity: i32, limit_price: f64, trigger_price: f64) -> Order {
    Order {
        action: action.to_string(),
        order_type: "LIT".to_string(),
        total_quantity: quantity,
        lmt_price: limit_price,
        aux_price: trigger_price,
        ..Default::default()
    }
}

/// A Limit-on-close (LOC) order will be submitted at the close and will execute if the closing price is at or better than the
/// submitted limit price.
/// Products: CFD, FUT, STK, WAR
//==================================================================================================
pub fn limit_on_close(action: &str, quantity: i32, limit_price: f64) -> Order {
    Order {
        action: action.to_string(),
        order_type: "LOC".to_string(),
        total_quantity: quantity,
        lmt_price: limit_price,
        ..Default::default()
    }
}

/// A Limit-on-Open (LOO) order combines a limit order with the OPG time in force to create an order that is submitted at the
/// market's open, and that will only execute at the specified limit price or better.
/// Products: CFD, STK, OPT, WAR
//==================================================================================================
pub fn limit_on_open(action: &str, quantity: i32, limit_price: f64) -> Order {
    Order {
        action: action.to_string(),
        tif: "OPG".to_string(),
        order_type: "LMT".to_string(),
        total_quantity: quantity,
        lmt_price: limit_price,
        ..Default::default()
    }
}

/// Passive Relative orders provide a means for traders to seek a less aggressive price than the National Best Bid and Offer (NBBO)
/// while keeping the order pegged to the best bid (for a buy) or ask (for a sell).
/// Products: STK, WAR
//==================================================================================================
pub fn passive_relative(action: &str, quantity: i32, offset: f64) -> Order {
    Order {
        action: action.to_string(),
        order_type: "PASSV REL".to_string(),
        total_quantity: quantity,
        aux_price: offset,
        ..Default::default()
    }
}

/// A pegged-to-midpoint order provides a means for traders to seek a price at the midpoint of the National Best Bid and Offer
/// (NBBO).
/// Products: STK
//==================================================================================================
pub fn pegged_to_midpoint(action: &str, quantity: i32, offset: f64, limit_price: f64) -> Order {
    Order {
        action: action.to_string(),
        order_type: "PEG MID".to_string(),
        total_quantity: quantity,
        aux_price: offset,
        lmt_price: limit_price,
        ..Default::default()
    }
}

/// Bracket orders are designed to help limit your loss and lock in a profit by "bracketing" an order with two opposite-side orders.
/// Products: CFD, BAG, FOP, CASH, FUT, OPT, STK, WAR
//==================================================================================================
pub fn bracket_order(
    parent_order_id: i32,
    action: &str,
    quantity: i32,
    limit_price: f64,
    take_profit_limit_price: f64,
    stop_loss_price: f64,
) -> (Order, Order, Order) {
    let parent = Order {
        order_id: parent_order_id,
        action: action.to_string(),
        order_type: "LMT".to_string(),
        total_quantity: quantity,
        lmt_price: limit_price,
        // Parent and children must have this set to False to prevent accidental
        // executions; the last child sets it to True.
        transmit: false,
        ..Default::default()
    };

    let take_profit = Order {
        order_id: parent.order_id + 1,
        action: (if action == "BUY" { "SELL" } else { "BUY" }).to_string(),
        order_type: "LMT".to_string(),
        total_quantity: quantity,
        lmt_price: take_profit_limit_price,
        parent_id: parent_order_id,
        transmit: false,
        ..Default::default()
    };

    let stop_loss = Order {
        order_id: parent.order_id + 2,
        action: (if action == "BUY" { "SELL" } else { "BUY" }).to_string(),
        order_type: "STP".to_string(),
        aux_price: stop_loss_price,
        total_quantity: quantity,
        parent_id: parent_order_id,
        // The last child activates all its predecessors.
        transmit: true,
        ..Default::default()
    };

    (parent, take_profit, stop_loss)
}

/// A Market-to-Limit (MTL) order is submitted as a market order to execute at the current best market price. If the order is only
/// partially filled, the remainder is canceled and re-submitted as a limit order at the price the filled portion executed at.
/// Products: CFD, FUT, FOP, OPT, STK, WAR
//==================================================================================================
pub fn market_to_limit(action: &str, quantity: i32) -> Order {
    Order {
        action: action.to_string(),
        order_type: "MTL".to_string(),
        total_quantity: quantity,
        ..Default::default()
    }
}

/// A Market with Protection order is a market order that will be cancelled and resubmitted as a limit order if the entire order
/// does not immediately execute at the market price.
/// Products: FUT, FOP
//==================================================================================================
pub fn market_with_protection(action: &str, quantity: i32) -> Order {
    Order {
        action: action.to_string(),
        order_type: "MKT PRT".to_string(),
        total_quantity: quantity,
        ..Default::default()
    }
}

/// A stop order is an instruction to submit a buy or sell market order if and when the user-specified stop trigger price is
/// attained or penetrated.
/// Products: CFD, BAG, CASH, FUT, FOP, OPT, STK, WAR
//==================================================================================================
pub fn stop(action: &str, quantity: i32, stop_price: f64) -> Order {
    Order {
        action: action.to_string(),
        order_type: "STP".to_string(),
        aux_price: stop_price,
        total_quantity: quantity,
        ..Default::default()
    }
}

/// A stop-limit order is an instruction to submit a buy or sell limit order when the user-specified stop trigger price is
/// attained or penetrated.
/// Products: CFD, CASH, FUT, FOP, OPT, STK, WAR
//==================================================================================================
pub fn stop_limit(action: &str, quantity: i32, limit_price: f64, stop_price: f64) -> Order {
    Order {
        action: action.to_string(),
        order_type: "STP LMT".to_string(),
        total_quantity: quantity,
        lmt_price: limit_price,
        aux_price: stop_price,
        ..Default::default()
    }
}

/// A stop with protection order combines the functionality of a stop order with a market with protection order.
/// Products: FUT
//==================================================================================================
pub fn stop_with_protection(action: &str, quantity: i32, stop_price: f64) -> Order {
    Order {
        total_quantity: quantity,
        action: action.to_string(),
        order_type: "STP PRT".to_string(),
        aux_price: stop_price,
        ..Default::default()
    }
}

/// A trailing stop order sets the stop price at a fixed amount from the market price with an attached "trailing" amount. As the
/// market price moves favorably, the stop price trails it by the trail amount; an unfavorable move leaves the stop price
/// unchanged, and a market order is submitted when the stop price is hit.
/// Products: CFD, CASH, FOP, FUT, OPT, STK, WAR
//==================================================================================================
pub fn trailing_stop(action: &str, quantity: i32, trailing_percent: f64, trail_stop_price: f64) -> Order {
    Order {
        action: action.to_string(),
        order_type: "TRAIL".to_string(),
        total_quantity: quantity,
        trailing_percent,
        trail_stop_price,
        ..Default::default()
    }
}

/// Create combination orders that include options, stock and futures legs (stock legs can be included if the order is routed
/// through SmartRouting).
/// Products: OPT, STK, FUT
//==================================================================================================
pub fn combo_limit_order(action: &str, quantity: i32, limit_price: f64, non_guaranteed: bool) -> Order {
    let mut order = Order {
        action: action.to_string(),
        order_type: "LMT".to_string(),
        tif: "GTC".to_string(),
        total_quantity: quantity,
        lmt_price: limit_price,
        ..Default::default()
    };

    if non_guaranteed {
        order
            .smart_combo_routing_params
            .push(TagValue::new("NonGuaranteed".to_string(), "1".to_string()));
    }

    order
}

/// Create combination orders that include options, stock and futures legs (stock legs can be included if the order is routed
/// through SmartRouting).
/// Products: OPT, STK, FUT
//==================================================================================================
pub fn combo_market_order(action: &str, quantity: i32, non_guaranteed: bool) -> Order {
    let mut order = Order {
        action: action.to_string(),
        order_type: "MKT".to_string(),
        total_quantity: quantity,
        ..Default::default()
    };

    if non_guaranteed {
        order
            .smart_combo_routing_params
            .push(TagValue::new("NonGuaranteed".to_string(), "1".to_string()));
    }

    order
}

/// Create combination orders with an explicit price set on each leg.
/// Products: OPT, STK, FUT
//==================================================================================================
pub fn limit_order_for_combo_with_leg_prices(
    action: &str,
    quantity: i32,
    leg_prices: Vec<f64>,
    non_guaranteed: bool,
) -> Order {
    let mut order = Order {
        action: action.to_string(),
        order_type: "LMT".to_string(),
        total_quantity: quantity,
        order_combo_legs: leg_prices
            .iter()
            .map(|&price| OrderComboLeg { price })
            .collect::<Vec<_>>(),
        ..Default::default()
    };

    if non_guaranteed {
        order
            .smart_combo_routing_params
            .push(TagValue::new("NonGuaranteed".to_string(), "1".to_string()));
    }

    order
}

/// Create combination orders that include options, stock and futures legs (stock legs can be included if the order is routed
/// through SmartRouting).
/// Products: OPT, STK, FUT
//==================================================================================================
pub fn relative_limit_combo(action: &str, quantity: i32, limit_price: f64, non_guaranteed: bool) -> Order {
    let mut order = Order {
        action: action.to_string(),
        total_quantity: quantity,
        order_type: "REL + LMT".to_string(),
        lmt_price: limit_price,
        ..Default::default()
    };

    if non_guaranteed {
        order
            .smart_combo_routing_params
            .push(TagValue::new("NonGuaranteed".to_string(), "1".to_string()));
    }

    order
}

/// Create combination orders that include options, stock and futures legs (stock legs can be included if the order is routed
/// through SmartRouting).
/// Products: OPT, STK, FUT
//==================================================================================================
pub fn relative_market_combo(action: &str, quantity: i32, non_guaranteed: bool) -> Order {
    let mut order = Order {
        action: action.to_string(),
        total_quantity: quantity,
        order_type: "REL + MKT".to_string(),
        ..Default::default()
    };

    if non_guaranteed {
        order
            .smart_combo_routing_params
            .push(TagValue::new("NonGuaranteed".to_string(), "1".to_string()));
    }

    order
}

/// One-Cancels-All (OCA) order type allows an investor to place multiple and possibly unrelated orders assigned to a group.
/// Completion of one piece of the group causes cancellation of the remaining group orders.
/// Products: BOND, CASH, FUT, FOP, STK, OPT, WAR
//==================================================================================================
pub fn one_cancels_all(oca_group: &str, oca_orders: Vec<Order>, oca_type: i32) -> Vec<Order> {
    oca_orders
        .into_iter()
        .map(|mut order| {
            order.oca_group = oca_group.to_string();
            order.oca_type = oca_type;
            order
        })
        .collect()
}

/// Specific to US options, investors are able to create and enter volatility-type orders for options and combinations rather
/// than price orders.
/// Products: FOP, OPT
//==================================================================================================
pub fn volatility(action: &str, quantity: i32, volatility_percent: f64, volatility_type: i32) -> Order {
    Order {
        action: action.to_string(),
        order_type: "VOL".to_string(),
        total_quantity: quantity,
        volatility: volatility_percent,
        volatility_type, // 1=daily, 2=annual
        ..Default::default()
    }
}

//==================================================================================================
pub fn market_fhedge(parent_order_id: i32, action: &str) -> Order {
    // FX Hedge orders can only have a quantity of 0
    let mut order = market_order(action, 0);

    order.parent_id = parent_order_id;
    order.hedge_type = "F".to_string();

    order
}

//==================================================================================================
pub fn what_if_limit_order(action: &str, quantity: i32, limit_price: f64) -> Order {
    let mut order = limit_order(action, quantity, limit_price);
    order.what_if = true;

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_order_chains_parent_ids_and_transmit_flags() {
        let (parent, take_profit, stop_loss) = bracket_order(1, "BUY", 100, 30.0, 35.0, 25.0);
        assert_eq!(parent.transmit, false);
        assert_eq!(take_profit.parent_id, 1);
        assert_eq!(stop_loss.parent_id, 1);
        assert_eq!(stop_loss.transmit, true);
    }

    #[test]
    fn combo_limit_order_tags_non_guaranteed() {
        let order = combo_limit_order("BUY", 1, 10.0, true);
        assert_eq!(order.smart_combo_routing_params.len(), 1);
        assert_eq!(order.smart_combo_routing_params[0].tag, "NonGuaranteed");
    }

    #[test]
    fn market_fhedge_is_a_zero_quantity_hedge() {
        let order = market_fhedge(7, "BUY");
        assert_eq!(order.total_quantity, 0);
        assert_eq!(order.hedge_type, "F");
        assert_eq!(order.parent_id, 7);
    }
}
